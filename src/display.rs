use colored::Colorize;

use crate::database::models::{Match, Player, Standing};
use crate::pairing::Pairings;

pub fn render_standings(standings: &[Standing]) -> String {
    if standings.is_empty() {
        return "No players registered".dimmed().to_string();
    }

    let mut lines = vec![format!(
        "{:>5}  {:<24} {:>5} {:>7}",
        "Id".bold(),
        "Name".bold(),
        "Wins".bold(),
        "Matches".bold()
    )];
    lines.extend(standings.iter().map(|s| {
        format!(
            "{:>5}  {:<24} {:>5} {:>7}",
            s.id,
            s.name,
            s.wins.to_string().green(),
            s.matches
        )
    }));
    lines.join("\n")
}

pub fn render_pairings(pairings: &Pairings) -> String {
    let mut lines: Vec<String> = pairings
        .pairs
        .iter()
        .enumerate()
        .map(|(table, p)| {
            format!(
                "{} {} ({}) {} {} ({})",
                format!("Table {}:", table + 1).bold(),
                p.name1,
                p.id1,
                "vs".dimmed(),
                p.name2,
                p.id2
            )
        })
        .collect();

    if lines.is_empty() && pairings.unpaired.is_none() {
        lines.push("No pairings".dimmed().to_string());
    }
    if let Some(player) = &pairings.unpaired {
        lines.push(format!(
            "{} {} ({})",
            "Unpaired:".yellow().bold(),
            player.name,
            player.id
        ));
    }
    lines.join("\n")
}

pub fn render_matches(matches: &[Match]) -> String {
    if matches.is_empty() {
        return "No matches reported".dimmed().to_string();
    }

    matches
        .iter()
        .map(|m| format!("#{:<4} {} beat {}", m.id, m.winner.to_string().green(), m.loser))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_player(player: &Player) -> String {
    format!("{} {} (id {})", "Registered".green().bold(), player.name, player.id)
}
