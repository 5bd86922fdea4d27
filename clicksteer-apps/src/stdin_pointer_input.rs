use std::{
    io::{self, BufRead},
    sync::{
        atomic::{AtomicBool, Ordering::Relaxed},
        Arc,
    },
};

use clicksteer_interface::{async_trait, MouseButton, PointerEvent, PointerInput};
use tracing::{debug, error, warn};

use crate::Error;

/// Parses one line of the stdin pointer protocol.
///
/// ```text
/// down <left|right|middle> <x> <y>
/// up <left|right|middle> <x> <y>
/// move <x> <y>
/// click <x> <y>        # same as `down left <x> <y>`
/// ```
///
/// Empty lines and lines starting with `#` yield `Ok(None)`.
pub fn parse_pointer_event(line: &str) -> Result<Option<PointerEvent>, Error> {
    let invalid = |message: String| Error::InvalidPointerEvent {
        line: line.to_owned(),
        message,
    };
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }
    let words: Vec<_> = line.split_whitespace().collect();
    let coordinate = |s: &str| {
        s.parse::<i32>()
            .map_err(|e| invalid(format!("invalid coordinate {s:?}: {e}")))
    };
    let button = |s: &str| match s.to_ascii_lowercase().as_str() {
        "left" => Ok(MouseButton::Left),
        "right" => Ok(MouseButton::Right),
        "middle" => Ok(MouseButton::Middle),
        _ => Err(invalid(format!("unknown button {s:?}"))),
    };

    let event = match words[..] {
        ["down", b, x, y] => PointerEvent::ButtonPressed {
            button: button(b)?,
            x: coordinate(x)?,
            y: coordinate(y)?,
        },
        ["up", b, x, y] => PointerEvent::ButtonReleased {
            button: button(b)?,
            x: coordinate(x)?,
            y: coordinate(y)?,
        },
        ["move", x, y] => PointerEvent::Moved {
            x: coordinate(x)?,
            y: coordinate(y)?,
        },
        ["click", x, y] => PointerEvent::ButtonPressed {
            button: MouseButton::Left,
            x: coordinate(x)?,
            y: coordinate(y)?,
        },
        _ => {
            return Err(invalid(
                "expected `down|up <button> <x> <y>`, `move <x> <y>` or `click <x> <y>`"
                    .to_owned(),
            ))
        }
    };
    Ok(Some(event))
}

/// [`PointerInput`] that reads pointer events from a line-oriented reader,
/// stdin by default.
///
/// Malformed lines are logged and skipped. End of input is reported as
/// [`PointerEvent::Unknown`].
#[derive(Debug)]
pub struct StdinPointerInput {
    receiver: flume::Receiver<PointerEvent>,
    is_running: Arc<AtomicBool>,
}

impl StdinPointerInput {
    pub fn new() -> Self {
        Self::from_reader(io::BufReader::new(io::stdin()))
    }

    pub fn from_reader<R>(reader: R) -> Self
    where
        R: BufRead + Send + 'static,
    {
        let (sender, receiver) = flume::unbounded();
        let is_running = Arc::new(AtomicBool::new(true));
        let is_running_cloned = is_running.clone();

        std::thread::spawn(move || {
            for line in reader.lines() {
                if !is_running_cloned.load(Relaxed) {
                    break;
                }
                let line = match line {
                    Ok(line) => line,
                    Err(e) => {
                        error!("failed to read pointer input: {e}");
                        break;
                    }
                };
                match parse_pointer_event(&line) {
                    Ok(Some(event)) => {
                        debug!("sending {event:?}");
                        if sender.send(event).is_err() {
                            break;
                        }
                    }
                    Ok(None) => {}
                    Err(e) => warn!("{e}"),
                }
            }
            debug!("pointer input reader finished");
        });

        Self {
            receiver,
            is_running,
        }
    }
}

impl Default for StdinPointerInput {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PointerInput for StdinPointerInput {
    async fn next_event(&self) -> PointerEvent {
        match self.receiver.recv_async().await {
            Ok(e) => e,
            Err(_) => PointerEvent::Unknown,
        }
    }

    fn stop(&self) {
        self.is_running.store(false, Relaxed);
    }
}

impl Drop for StdinPointerInput {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!(
            parse_pointer_event("down left 300 100").unwrap(),
            Some(PointerEvent::ButtonPressed {
                button: MouseButton::Left,
                x: 300,
                y: 100
            })
        );
        assert_eq!(
            parse_pointer_event("  up Right 1 -2 ").unwrap(),
            Some(PointerEvent::ButtonReleased {
                button: MouseButton::Right,
                x: 1,
                y: -2
            })
        );
        assert_eq!(
            parse_pointer_event("move 5 6").unwrap(),
            Some(PointerEvent::Moved { x: 5, y: 6 })
        );
        assert_eq!(
            parse_pointer_event("click 7 8").unwrap(),
            Some(PointerEvent::ButtonPressed {
                button: MouseButton::Left,
                x: 7,
                y: 8
            })
        );
        assert_eq!(parse_pointer_event("").unwrap(), None);
        assert_eq!(parse_pointer_event("# comment").unwrap(), None);
    }

    #[test]
    fn test_parse_errors() {
        for line in [
            "down left 300",
            "down thumb 1 2",
            "move a 2",
            "jump 1 2",
            "click 1 99999999999",
        ] {
            assert!(
                matches!(
                    parse_pointer_event(line),
                    Err(Error::InvalidPointerEvent { .. })
                ),
                "{line}"
            );
        }
    }

    #[tokio::test]
    async fn test_from_reader() {
        let input = StdinPointerInput::from_reader(Cursor::new(
            "move 1 1\nnot an event\n\ndown middle 2 3\n",
        ));
        assert_eq!(input.next_event().await, PointerEvent::Moved { x: 1, y: 1 });
        assert_eq!(
            input.next_event().await,
            PointerEvent::ButtonPressed {
                button: MouseButton::Middle,
                x: 2,
                y: 3
            }
        );
        assert_eq!(input.next_event().await, PointerEvent::Unknown);
    }
}
