use std::path::Path;
use unit_battle::{
    get_default_unit, BattleOptions, Game, GameConfig, GamePlayer, InMemoryPlayerDataStore,
    TurnBar,
};

#[tokio::main]
async fn main() {
    let config_path = Path::new("data/game_config.ron");
    let config = if config_path.exists() {
        match GameConfig::load(config_path) {
            Ok(config) => config,
            Err(e) => {
                println!("Error loading game config: {}", e);
                return;
            }
        }
    } else {
        GameConfig::default()
    };

    println!("=== Tutorial Battle Demo ===");
    let mut game = Game::with_config(InMemoryPlayerDataStore::new(), config);

    // Example 1: Register a human player and an AI opponent
    let mut hero = GamePlayer::new("new", "Test Player");
    hero.add_unit(&get_default_unit("2"));
    hero.add_unit(&get_default_unit("3"));
    let mut ai = GamePlayer::new("new", "AI Player");
    ai.add_unit(&get_default_unit("1"));
    ai.add_unit(&get_default_unit("4"));

    let hero_id = match game.register_player(hero, "Test Player", "tp", "12345").await {
        Ok(id) => id,
        Err(e) => {
            println!("Error registering player: {}", e);
            return;
        }
    };
    let ai_id = match game.register_player(ai, "AI Player", "ai", "ai").await {
        Ok(id) => id,
        Err(e) => {
            println!("Error registering AI player: {}", e);
            return;
        }
    };
    println!("Registered players {} and {}", hero_id, ai_id);

    // Example 2: Start a tutorial battle with a speed turn bar
    let options = BattleOptions::new(&hero_id, &ai_id).with_turn_bar(TurnBar::new());
    let battle_id = match game.create_battle(options).await {
        Ok(id) => id,
        Err(e) => {
            println!("Error creating battle: {}", e);
            return;
        }
    };
    println!("Created battle {}", battle_id);

    // Example 3: Attack with whichever of our units is on turn until it is over
    for round in 1..=50 {
        let battle = match game.get_battle(&battle_id, None).await {
            Ok(battle) => battle,
            Err(e) => {
                println!("Error loading battle: {}", e);
                return;
            }
        };
        if battle.has_ended() {
            break;
        }

        let attacker = battle
            .turn_bar
            .as_ref()
            .and_then(|turn_bar| turn_bar.current_turn())
            .map(|turn| turn.unit_join_number);
        let defender = battle
            .player_two
            .get_non_defeated_units()
            .first()
            .map(|unit| unit.join_number);
        let (Some(attacker), Some(defender)) = (attacker, defender) else {
            println!("No legal attack left in round {}", round);
            break;
        };

        match game.attack(&battle_id, attacker, defender, None).await {
            Ok(battle) => println!(
                "Round {:2}: {}",
                round,
                battle.short_battle_actions().join(" ")
            ),
            Err(e) => {
                println!("Attack rejected: {}", e);
                break;
            }
        }
    }

    println!();

    // Example 4: Dump the final battle state as JSON
    match game.get_battle(&battle_id, None).await {
        Ok(battle) => {
            if let Some(winner) = battle.winner() {
                println!("Winner: {} ({})", winner.name, winner.player_id);
            }
            match serde_json::to_string_pretty(battle) {
                Ok(json) => println!("{}", json),
                Err(e) => println!("Error serializing battle: {}", e),
            }
        }
        Err(e) => println!("Error loading battle: {}", e),
    }
}
