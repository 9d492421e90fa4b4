use crate::{
    artifact::{Artifact, RawArtifactRecord},
    decode::{self, Options},
    error::Result,
    fetch,
    inventory::{self, Section},
    message,
    sender::{self, Sender},
    total::Totals,
};

use std::io::Write;

pub async fn text<W>(url: &str, user_id: &str, config: Config, writer: W) -> Result<()>
where
    W: Write + Send + Sync,
{
    let sender = sender::Write::new(writer);
    let msg_gen = message::ReportGenerator {};
    let mut calc = Calculator::new(url, config, sender, msg_gen);
    calc.report(user_id).await
}

pub async fn json<W>(url: &str, user_id: &str, config: Config, writer: W) -> Result<()>
where
    W: Write + Send + Sync,
{
    let sender = sender::Json::new(writer);
    let msg_gen = message::ReportGenerator {};
    let mut calc = Calculator::new(url, config, sender, msg_gen);
    calc.report(user_id).await
}

#[derive(Debug, Clone)]
pub struct Config {
    pub equipped_only: bool,
    pub options: Options,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            equipped_only: true,
            options: Options::default(),
        }
    }
}

struct Calculator<'a, S, M>
where
    S: Sender,
    M: message::Generator,
{
    url: &'a str,
    config: Config,
    sender: S,
    msg_gen: M,
}

impl<'a, S, M> Calculator<'a, S, M>
where
    S: Sender,
    M: message::Generator,
    <M as message::Generator>::Message: Send + Sync,
{
    fn new(url: &'a str, config: Config, sender: S, msg_gen: M) -> Self {
        Self {
            url,
            config,
            sender,
            msg_gen,
        }
    }

    async fn report(&mut self, user_id: &str) -> Result<()> {
        let page = fetch::inventory_page(self.url, user_id).await?;
        let section = Section::new(self.config.equipped_only);
        let records = inventory::records(&page, section)?;
        log::info!("found {} artifacts", records.len());

        let totals = total(&records, &self.config.options);
        let msg = self.msg_gen.generate(&totals);
        self.sender.send(msg).await
    }
}

/// Artifacts that fail to decode are logged and left out of the totals.
pub fn decode_all(records: &[RawArtifactRecord], options: &Options) -> Vec<Option<Artifact>> {
    records
        .iter()
        .map(|record| {
            decode::decode(record, options)
                .map_err(|e| log::warn!("skipping artifact {}: {}", record.id, e))
                .ok()
        })
        .collect()
}

pub fn total(records: &[RawArtifactRecord], options: &Options) -> Totals {
    let artifacts = decode_all(records, options);
    Totals::from_artifacts(artifacts.iter().map(Option::as_ref))
}
