use std::{
    fmt,
    io::{self, Write},
    sync::Mutex,
};

use clicksteer_interface::{
    AnnotationSize, Error, TargetPoint, TargetPublisher, VelocityCommand, VelocityPublisher,
};
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(tag = "topic", rename_all = "snake_case")]
enum Message {
    Point { x: f64, y: f64 },
    AnnotationSize { size: u32 },
    CmdVel { linear: f64, angular: f64 },
}

/// Publishes every message as one JSON object per line.
pub struct JsonLinesPublisher<W> {
    writer: Mutex<W>,
}

impl JsonLinesPublisher<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W> JsonLinesPublisher<W>
where
    W: Write + Send,
{
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
            .into_inner()
            .unwrap_or_else(|e| e.into_inner())
    }

    fn publish(&self, message: &Message) -> Result<(), Error> {
        let mut line =
            serde_json::to_vec(message).map_err(|e| connection_error(message, e))?;
        line.push(b'\n');
        let mut writer = self
            .writer
            .lock()
            .map_err(|e| connection_error(message, e))?;
        writer
            .write_all(&line)
            .and_then(|()| writer.flush())
            .map_err(|e| connection_error(message, e))
    }
}

fn connection_error(message: &Message, e: impl fmt::Display) -> Error {
    Error::Connection {
        message: format!("failed to write {message:?}: {e}"),
    }
}

impl<W> fmt::Debug for JsonLinesPublisher<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JsonLinesPublisher").finish_non_exhaustive()
    }
}

impl<W> VelocityPublisher for JsonLinesPublisher<W>
where
    W: Write + Send,
{
    fn send_velocity(&self, velocity: &VelocityCommand) -> Result<(), Error> {
        self.publish(&Message::CmdVel {
            linear: velocity.linear,
            angular: velocity.angular,
        })
    }
}

impl<W> TargetPublisher for JsonLinesPublisher<W>
where
    W: Write + Send,
{
    fn send_point(&self, point: &TargetPoint) -> Result<(), Error> {
        self.publish(&Message::Point {
            x: point.x,
            y: point.y,
        })
    }

    fn send_annotation_size(&self, size: AnnotationSize) -> Result<(), Error> {
        self.publish(&Message::AnnotationSize { size: size.get() })
    }
}
