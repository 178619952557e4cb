//! Scryfall-shaped card records for unit tests.

use serde_json::Value;
use serde_json::json;

use crate::card::Card;

pub fn card_from(value: Value) -> Card {
    serde_json::from_value(value).expect("fixture should deserialize")
}

pub fn lightning_bolt() -> Card {
    card_from(json!({
        "object": "card",
        "name": "Lightning Bolt",
        "layout": "normal",
        "mana_cost": "{R}",
        "type_line": "Instant",
        "oracle_text": "Lightning Bolt deals 3 damage to any target.",
        "flavor_text": "The sparkmage shrieked, calling on the rage of the storms of his youth.",
        "colors": ["R"],
        "color_identity": ["R"],
        "rarity": "common",
        "artist": "Christopher Moeller"
    }))
}

pub fn grizzly_bears() -> Card {
    card_from(json!({
        "name": "Grizzly Bears",
        "layout": "normal",
        "mana_cost": "{1}{G}",
        "type_line": "Creature — Bear",
        "oracle_text": "",
        "flavor_text": "Don't try to outrun one of Dominaria's grizzlies; it'll catch you, knock you down, and eat you.",
        "power": "2",
        "toughness": "2",
        "colors": ["G"],
        "color_identity": ["G"],
        "rarity": "common",
        "artist": "Jeff A. Menges"
    }))
}

/// A creature with no rules text and no flavor text.
pub fn vanilla_bear() -> Card {
    card_from(json!({
        "name": "Runeclaw Bear",
        "layout": "normal",
        "mana_cost": "{1}{G}",
        "type_line": "Creature — Bear",
        "power": "2",
        "toughness": "2",
        "colors": ["G"],
        "color_identity": ["G"],
        "rarity": "common",
        "artist": "Jesper Ejsing"
    }))
}

pub fn jace_beleren() -> Card {
    card_from(json!({
        "name": "Jace Beleren",
        "layout": "normal",
        "mana_cost": "{1}{U}{U}",
        "type_line": "Legendary Planeswalker — Jace",
        "oracle_text": "+2: Each player draws a card.\n−1: Target player draws a card.\n−10: Target player mills twenty cards.",
        "loyalty": "3",
        "colors": ["U"],
        "color_identity": ["U"],
        "rarity": "mythic",
        "artist": "Aleksi Briclot"
    }))
}

pub fn fire_ice() -> Card {
    card_from(json!({
        "name": "Fire // Ice",
        "layout": "split",
        "mana_cost": "{1}{R} // {1}{U}",
        "type_line": "Instant // Instant",
        "colors": ["U", "R"],
        "color_identity": ["U", "R"],
        "rarity": "uncommon",
        "artist": "Franz Vohwinkel",
        "card_faces": [
            {
                "object": "card_face",
                "name": "Fire",
                "mana_cost": "{1}{R}",
                "type_line": "Instant",
                "oracle_text": "Fire deals 2 damage divided as you choose among one or two targets.",
                "artist": "Franz Vohwinkel"
            },
            {
                "object": "card_face",
                "name": "Ice",
                "mana_cost": "{1}{U}",
                "type_line": "Instant",
                "oracle_text": "Tap target permanent.\nDraw a card.",
                "artist": "Franz Vohwinkel"
            }
        ]
    }))
}

pub fn delver_of_secrets() -> Card {
    card_from(json!({
        "name": "Delver of Secrets // Insectile Aberration",
        "layout": "transform",
        "type_line": "Creature — Human Wizard // Creature — Human Insect",
        "color_identity": ["U"],
        "rarity": "common",
        "artist": "Matt Stewart",
        "card_faces": [
            {
                "name": "Delver of Secrets",
                "mana_cost": "{U}",
                "type_line": "Creature — Human Wizard",
                "oracle_text": "At the beginning of your upkeep, look at the top card of your library. You may reveal that card. If an instant or sorcery card is revealed this way, transform Delver of Secrets.",
                "power": "1",
                "toughness": "1",
                "colors": ["U"]
            },
            {
                "name": "Insectile Aberration",
                "mana_cost": "",
                "type_line": "Creature — Human Insect",
                "oracle_text": "Flying",
                "power": "3",
                "toughness": "2"
            }
        ]
    }))
}

pub fn akki_lavarunner() -> Card {
    card_from(json!({
        "name": "Akki Lavarunner // Tok-Tok, Volcano Born",
        "layout": "flip",
        "mana_cost": "{3}{R}",
        "type_line": "Creature — Goblin Warrior // Legendary Creature — Goblin Shaman",
        "colors": ["R"],
        "color_identity": ["R"],
        "rarity": "rare",
        "artist": "Matt Cavotta",
        "card_faces": [
            {
                "name": "Akki Lavarunner",
                "mana_cost": "{3}{R}",
                "type_line": "Creature — Goblin Warrior",
                "oracle_text": "Haste\nWhenever Akki Lavarunner deals damage to an opponent, flip it.",
                "power": "1",
                "toughness": "1"
            },
            {
                "name": "Tok-Tok, Volcano Born",
                "mana_cost": "",
                "type_line": "Legendary Creature — Goblin Shaman",
                "oracle_text": "Protection from red\nIf a red source would deal damage to a player, it deals that much damage plus 1 to that player instead.",
                "power": "2",
                "toughness": "2"
            }
        ]
    }))
}

pub fn history_of_benalia() -> Card {
    card_from(json!({
        "name": "History of Benalia",
        "layout": "saga",
        "mana_cost": "{1}{W}{W}",
        "type_line": "Enchantment — Saga",
        "oracle_text": "(As this Saga enters and after your draw step, add a lore counter. Sacrifice after III.)\nI, II — Create a 2/2 white Knight creature token with vigilance.\nIII — Knights you control get +2/+1 until end of turn.",
        "colors": ["W"],
        "color_identity": ["W"],
        "rarity": "mythic",
        "artist": "Noah Bradley"
    }))
}

pub fn bruna_the_fading_light() -> Card {
    card_from(json!({
        "name": "Bruna, the Fading Light",
        "layout": "meld",
        "mana_cost": "{5}{W}{W}",
        "type_line": "Legendary Creature — Angel Horror",
        "oracle_text": "When you cast this spell, you may return target Angel or Human creature card from your graveyard to the battlefield.\nFlying, vigilance",
        "power": "5",
        "toughness": "7",
        "colors": ["W"],
        "color_identity": ["W"],
        "rarity": "rare",
        "artist": "Clint Cearley"
    }))
}

pub fn bonecrusher_giant() -> Card {
    card_from(json!({
        "name": "Bonecrusher Giant // Stomp",
        "layout": "adventure",
        "mana_cost": "{2}{R} // {1}{R}",
        "type_line": "Creature — Giant // Instant — Adventure",
        "colors": ["R"],
        "color_identity": ["R"],
        "rarity": "rare",
        "artist": "Victor Adame Minguez",
        "card_faces": [
            {
                "name": "Bonecrusher Giant",
                "mana_cost": "{2}{R}",
                "type_line": "Creature — Giant",
                "oracle_text": "Whenever Bonecrusher Giant becomes the target of a spell, Bonecrusher Giant deals 2 damage to that spell's controller.",
                "power": "4",
                "toughness": "3"
            },
            {
                "name": "Stomp",
                "mana_cost": "{1}{R}",
                "type_line": "Instant — Adventure",
                "oracle_text": "Damage can't be prevented this turn. Stomp deals 2 damage to any target."
            }
        ]
    }))
}
