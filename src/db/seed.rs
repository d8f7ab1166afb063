use super::Store;
use crate::models::{Championship, Player, Team};

pub(super) fn fixtures() -> Store {
    let time_a = Team::new("Time A")
        .with_player(Player::new("Ana", "atacante", "ana@email.com", 25))
        .with_player(Player::new("Beatriz", "defensora", "bea@email.com", 24));

    Store::new()
        .with_user("exemplo@email.com", "senha123", "Usuário Exemplo")
        .with_championship(
            "campeonato1",
            Championship::new("Copa Feminina", "São Paulo", "20/10/2025").with_team(time_a),
        )
}
