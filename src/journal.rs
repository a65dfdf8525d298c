//! Optional JSON-lines event journal.
//!
//! When enabled, every game start and every core event is appended as one
//! JSON object per line:
//!
//! ```text
//! {"type":"start","ts":1760700000000,"game":0}
//! {"type":"placed","ts":1760700001200,"game":0,"seq":1,"row":5,"column":3,"player":1}
//! {"type":"ended","ts":1760700009000,"game":0,"seq":7,"result":"won","winner":1,"message":"Player 1 won!"}
//! ```
//!
//! The journal is write-only diagnostics. A journal file that cannot be opened
//! or written disables it for the rest of the session instead of interrupting
//! play.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use serde::Serialize;

use crate::config::AppConfig;
use crate::core::GameState;
use crate::types::CoreEvent;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum JournalRecord {
    Start {
        ts: u64,
        game: u32,
    },
    Placed {
        ts: u64,
        game: u32,
        seq: u32,
        row: u8,
        column: u8,
        player: u8,
    },
    Ended {
        ts: u64,
        game: u32,
        seq: u32,
        result: &'static str,
        winner: Option<u8>,
        message: String,
    },
}

impl JournalRecord {
    /// Map a core event to a record. `seq` is the move number it belongs to.
    pub fn from_event(game_id: u32, seq: u32, event: &CoreEvent, ts: u64) -> Self {
        match *event {
            CoreEvent::PiecePlaced {
                row,
                column,
                player,
            } => JournalRecord::Placed {
                ts,
                game: game_id,
                seq,
                row,
                column,
                player: player.id(),
            },
            CoreEvent::GameEnded { status } => JournalRecord::Ended {
                ts,
                game: game_id,
                seq,
                result: status.as_str(),
                winner: status.winner().map(|p| p.id()),
                message: status.announcement().unwrap_or_default(),
            },
        }
    }
}

fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

pub struct Journal {
    sink: Option<Box<dyn Write + Send>>,
    buf: Vec<u8>,
}

impl Journal {
    /// A journal that drops everything
    pub fn disabled() -> Self {
        Self {
            sink: None,
            buf: Vec::new(),
        }
    }

    pub fn to_writer(writer: impl Write + Send + 'static) -> Self {
        Self {
            sink: Some(Box::new(writer)),
            buf: Vec::with_capacity(256),
        }
    }

    /// Open `path` for appending, creating it if needed.
    pub fn open(path: &Path) -> Result<Self> {
        let file: File = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("journal: cannot open {}", path.display()))?;
        Ok(Self::to_writer(BufWriter::new(file)))
    }

    /// Journal configured by `CONNECT_FOUR_LOG_PATH`, disabled when unset
    /// or when the file cannot be opened.
    pub fn from_config(config: &AppConfig) -> Self {
        let Some(path) = &config.log_path else {
            return Self::disabled();
        };
        Self::open(path).unwrap_or_else(|e| {
            eprintln!("[Journal] disabled: {:#}", e);
            Self::disabled()
        })
    }

    pub fn is_enabled(&self) -> bool {
        self.sink.is_some()
    }

    pub fn record_start(&mut self, game: &GameState) {
        self.write(&JournalRecord::Start {
            ts: now_ms(),
            game: game.game_id(),
        });
    }

    /// Append events drained from `game`, oldest first.
    ///
    /// The batch may span several moves; placements are numbered backwards
    /// from the game's current move count.
    pub fn record_events(&mut self, game: &GameState, events: &[CoreEvent]) {
        if !self.is_enabled() {
            return;
        }
        let ts = now_ms();
        let placed = events
            .iter()
            .filter(|e| matches!(e, CoreEvent::PiecePlaced { .. }))
            .count() as u32;
        let mut seq = game.move_count().saturating_sub(placed);
        for event in events {
            if let CoreEvent::PiecePlaced { .. } = event {
                seq += 1;
            }
            self.write(&JournalRecord::from_event(game.game_id(), seq, event, ts));
        }
    }

    pub fn write(&mut self, record: &JournalRecord) {
        let Some(sink) = self.sink.as_mut() else {
            return;
        };
        self.buf.clear();
        if serde_json::to_writer(&mut self.buf, record).is_err() {
            return;
        }
        self.buf.push(b'\n');
        if sink.write_all(&self.buf).and_then(|_| sink.flush()).is_err() {
            self.sink = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{GameStatus, Player};
    use std::sync::{Arc, Mutex};

    #[test]
    fn records_serialize_with_type_tag() {
        let rec = JournalRecord::Placed {
            ts: 1,
            game: 0,
            seq: 1,
            row: 5,
            column: 3,
            player: 1,
        };
        assert_eq!(
            serde_json::to_string(&rec).unwrap(),
            r#"{"type":"placed","ts":1,"game":0,"seq":1,"row":5,"column":3,"player":1}"#
        );
    }

    #[test]
    fn ended_record_carries_announcement() {
        let rec = JournalRecord::from_event(
            0,
            0,
            &CoreEvent::GameEnded {
                status: GameStatus::Won(Player::Two),
            },
            7,
        );
        assert_eq!(
            rec,
            JournalRecord::Ended {
                ts: 7,
                game: 0,
                seq: 0,
                result: "won",
                winner: Some(2),
                message: "Player 2 won!".to_string(),
            }
        );
    }

    #[test]
    fn disabled_journal_is_silent() {
        let mut journal = Journal::disabled();
        assert!(!journal.is_enabled());
        journal.record_start(&GameState::new());
    }

    #[derive(Clone, Default)]
    struct SharedBuf(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedBuf {
        fn write(&mut self, data: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(data);
            Ok(data.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn batched_events_keep_their_move_numbers() {
        let buf = SharedBuf::default();
        let mut journal = Journal::to_writer(buf.clone());

        let mut game = GameState::new();
        for col in [0, 0, 4] {
            game.select_column(col).unwrap();
        }
        let events = game.take_events();
        journal.record_events(&game, &events);

        let text = String::from_utf8(buf.0.lock().unwrap().clone()).unwrap();
        let seqs: Vec<u64> = text
            .lines()
            .map(|l| {
                let v: serde_json::Value = serde_json::from_str(l).unwrap();
                v["seq"].as_u64().unwrap()
            })
            .collect();
        assert_eq!(seqs, vec![1, 2, 3]);
    }
}
