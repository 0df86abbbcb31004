//! Terminal output helpers shared by the commands.

use std::io::Write;

use headsup_engine::events::TableEvent;
use headsup_engine::player::Seat;

pub fn write_error(err: &mut dyn Write, msg: &str) -> std::io::Result<()> {
    writeln!(err, "Error: {}", msg)
}

/// Display a warning message to stderr with "WARNING:" prefix
pub fn display_warning(err: &mut dyn Write, message: &str) -> std::io::Result<()> {
    writeln!(err, "WARNING: {}", message)
}

/// One chat line, prefixed with who says it.
pub fn say(out: &mut dyn Write, speaker: Seat, line: &str) -> std::io::Result<()> {
    let who = match speaker {
        Seat::Player => "You",
        Seat::Opponent => "AI",
    };
    writeln!(out, "{}: {}", who, line)
}

pub fn narrate(out: &mut dyn Write, events: &[TableEvent]) -> std::io::Result<()> {
    for event in events {
        say(out, event.speaker(), &event.to_string())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn narration_is_prefixed_by_speaker() {
        let mut out = Vec::new();
        narrate(
            &mut out,
            &[
                TableEvent::Called {
                    seat: Seat::Player,
                    amount: 10,
                },
                TableEvent::Checked {
                    seat: Seat::Opponent,
                },
            ],
        )
        .unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "You: Call! Betting 10 chips.\nAI: Check.\n");
    }
}
