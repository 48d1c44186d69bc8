//! Text templates for tool results.

use super::responses::ChampionRecord;

/// Shown for any missing value
pub const PLACEHOLDER: &str = "N/A";

pub const ROLES: [&str; 6] = ["Assassin", "Fighter", "Mage", "Marksman", "Support", "Tank"];

pub fn champion_not_found(champion: &str) -> String {
    format!("Unable to fetch data or champion '{}' not found.", champion)
}

pub fn champion_list_unavailable() -> String {
    "Unable to fetch champion list.".to_string()
}

/// Render the detail block. `champion` is the looked-up key and is always
/// the `Name:` line, even when the display name differs (MonkeyKing/Wukong).
pub fn champion_detail(champion: &str, record: &ChampionRecord) -> String {
    let display_name = record.name.as_deref();
    let stats = &record.stats;
    let info = &record.info;

    let skins: Vec<&str> = record
        .skins
        .iter()
        .filter(|skin| skin.num != Some(0))
        .filter_map(|skin| skin.name.as_deref())
        .filter(|skin| {
            !skin.eq_ignore_ascii_case("default")
                && *skin != champion
                && Some(*skin) != display_name
        })
        .collect();

    format!(
        "Name: {champion}
Title: {title}
Tags: {tags}

Stats:
- HP: {hp}
- Attack: {attack}
- Defense: {defense}
- Magic: {magic}
- Difficulty: {difficulty}
- Attack Damage: {attackdamage}
- Armor: {armor}
- Spell Block: {spellblock}
- Movespeed: {movespeed}
- HP Regen: {hpregen}
- Mana: {mp}
- Mana Regen: {mpregen}

Skins: {skins}

Lore:
{lore}
",
        title = text(record.title.as_deref()),
        tags = list(&record.tags),
        hp = number(stats.hp),
        attack = number(info.attack),
        defense = number(info.defense),
        magic = number(info.magic),
        difficulty = number(info.difficulty),
        attackdamage = number(stats.attackdamage),
        armor = number(stats.armor),
        spellblock = number(stats.spellblock),
        movespeed = number(stats.movespeed),
        hpregen = number(stats.hpregen),
        mp = number(stats.mp),
        mpregen = number(stats.mpregen),
        skins = list(&skins),
        lore = text(record.lore.as_deref()),
    )
}

pub fn roster<S: AsRef<str>>(names: &[S]) -> String {
    format!("Total champions: {}\n\n{}", names.len(), join(names))
}

pub fn role_matches<S: AsRef<str>>(role: &str, names: &[S]) -> String {
    if names.is_empty() {
        return format!(
            "No champions found with role '{}'. Available roles: {}",
            role,
            ROLES.join(", ")
        );
    }
    format!(
        "Found {} champions with role '{}':\n\n{}",
        names.len(),
        role,
        join(names)
    )
}

fn join<S: AsRef<str>>(names: &[S]) -> String {
    names
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(", ")
}

fn text(value: Option<&str>) -> &str {
    match value {
        Some(s) if !s.is_empty() => s,
        _ => PLACEHOLDER,
    }
}

fn list<S: AsRef<str>>(values: &[S]) -> String {
    if values.is_empty() {
        PLACEHOLDER.to_string()
    } else {
        join(values)
    }
}

// f64's Display drops a zero fraction, so 650.0 renders as "650"
fn number(value: Option<f64>) -> String {
    value.map_or_else(|| PLACEHOLDER.to_string(), |n| n.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::data_dragon::responses::{ChampionStats, Skin};

    fn skin(name: &str) -> Skin {
        Skin {
            name: Some(name.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_record_renders_placeholders() {
        let output = champion_detail("Zed", &ChampionRecord::default());
        assert!(output.starts_with("Name: Zed\n"));
        assert!(output.contains("Title: N/A"));
        assert!(output.contains("Tags: N/A"));
        assert!(output.contains("- HP: N/A"));
        assert!(output.contains("- Mana Regen: N/A"));
        assert!(output.contains("Skins: N/A"));
        assert!(output.contains("Lore:\nN/A"));
    }

    #[test]
    fn test_numbers_render_shortest_form() {
        let record = ChampionRecord {
            stats: ChampionStats {
                hp: Some(650.0),
                hpregen: Some(3.5),
                mpregen: Some(0.0),
                ..Default::default()
            },
            ..Default::default()
        };
        let output = champion_detail("Aatrox", &record);
        assert!(output.contains("- HP: 650\n"));
        assert!(output.contains("- HP Regen: 3.5\n"));
        assert!(output.contains("- Mana Regen: 0\n"));
    }

    #[test]
    fn test_default_and_self_named_skins_filtered() {
        let record = ChampionRecord {
            name: Some("Jinx".to_string()),
            skins: vec![
                skin("default"),
                skin("Jinx"),
                skin("Mafia Jinx"),
                skin("Star Guardian Jinx"),
            ],
            ..Default::default()
        };
        let output = champion_detail("Jinx", &record);
        assert!(output.contains("Skins: Mafia Jinx, Star Guardian Jinx\n"));
    }

    #[test]
    fn test_base_skin_filtered_by_number() {
        let record = ChampionRecord {
            name: Some("Ahri".to_string()),
            skins: vec![
                Skin {
                    num: Some(0),
                    name: Some("Classic".to_string()),
                    ..Default::default()
                },
                Skin {
                    id: Some("103001".to_string()),
                    num: Some(1),
                    name: Some("Dynasty Ahri".to_string()),
                },
            ],
            ..Default::default()
        };
        let output = champion_detail("Ahri", &record);
        assert!(output.contains("Skins: Dynasty Ahri\n"));
    }

    #[test]
    fn test_name_line_uses_queried_key() {
        let record = ChampionRecord {
            id: Some("MonkeyKing".to_string()),
            name: Some("Wukong".to_string()),
            skins: vec![skin("default"), skin("Wukong"), skin("MonkeyKing"), skin("Lancer Wukong")],
            ..Default::default()
        };
        let output = champion_detail("MonkeyKing", &record);
        assert!(output.starts_with("Name: MonkeyKing\n"));
        assert!(output.contains("Skins: Lancer Wukong\n"));
    }

    #[test]
    fn test_roster_format() {
        assert_eq!(
            roster(&["Ahri", "Annie"]),
            "Total champions: 2\n\nAhri, Annie"
        );
    }

    #[test]
    fn test_role_hint_lists_six_roles() {
        let output = role_matches::<&str>("jungler", &[]);
        assert_eq!(
            output,
            "No champions found with role 'jungler'. Available roles: Assassin, Fighter, Mage, Marksman, Support, Tank"
        );
    }

    #[test]
    fn test_role_matches_format() {
        assert_eq!(
            role_matches("mage", &["Ahri", "Annie"]),
            "Found 2 champions with role 'mage':\n\nAhri, Annie"
        );
    }
}
