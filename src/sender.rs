use crate::error::Result;

use std::fmt::Display;
use std::io;

use async_trait::async_trait;
use serde::Serialize;

#[async_trait]
pub trait Sender {
    async fn send<M>(&mut self, msg: M) -> Result<()>
    where
        M: Display + Serialize + Send + Sync;
}

pub struct Write<W: io::Write + Sync + Send> {
    writer: W,
}

impl<W: io::Write + Sync + Send> Write<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

#[async_trait]
impl<W: io::Write + Send + Sync> Sender for Write<W> {
    async fn send<M>(&mut self, msg: M) -> Result<()>
    where
        M: Display + Serialize + Send + Sync,
    {
        writeln!(self.writer, "{}", msg)?;
        Ok(())
    }
}

/// Writes the JSON form of each message on its own line.
pub struct Json<W: io::Write + Sync + Send> {
    writer: W,
}

impl<W: io::Write + Sync + Send> Json<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

#[async_trait]
impl<W: io::Write + Send + Sync> Sender for Json<W> {
    async fn send<M>(&mut self, msg: M) -> Result<()>
    where
        M: Display + Serialize + Send + Sync,
    {
        serde_json::to_writer(&mut self.writer, &msg)?;
        writeln!(self.writer)?;
        Ok(())
    }
}
