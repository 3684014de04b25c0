//! Loading configuration whose fields are validated brands.

use anyhow::Context;
use branded::{brand, declare_label, Validate};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

declare_label! {
    /// TCP ports other than 0.
    pub enum PortLabel = "config::Port";
    /// Hostnames made of dot-separated, non-empty labels.
    pub enum HostLabel = "config::Host";
}

impl Validate<u16> for PortLabel {
    fn validate(value: &u16) -> Result<(), Cow<'static, str>> {
        if *value == 0 {
            Err(Cow::Borrowed("port 0 is reserved"))
        } else {
            Ok(())
        }
    }
}

impl Validate<String> for HostLabel {
    fn validate(value: &String) -> Result<(), Cow<'static, str>> {
        if value.split('.').any(str::is_empty) {
            return Err(Cow::Owned(format!("`{value}` has an empty label")));
        }
        Ok(())
    }
}

brand! {
    pub type Port = u16 as PortLabel;
    pub type Host = String as HostLabel;
}

#[derive(Debug, Serialize, Deserialize)]
struct Listen {
    #[serde(deserialize_with = "branded::serde::validated")]
    host: Host,
    #[serde(deserialize_with = "branded::serde::validated")]
    port: Port,
}

fn connect(host: &Host, port: Port) -> String {
    format!("{host}:{port}")
}

fn main() -> anyhow::Result<()> {
    let good = r#"{ "host": "db.internal", "port": 5432 }"#;
    let listen: Listen = serde_json::from_str(good).context("parsing listen config")?;
    println!("connecting to {}", connect(&listen.host, listen.port));
    println!("re-serialized: {}", serde_json::to_string(&listen)?);

    for bad in [r#"{ "host": "db..internal", "port": 5432 }"#, r#"{ "host": "db", "port": 0 }"#] {
        match serde_json::from_str::<Listen>(bad) {
            Ok(listen) => println!("unexpectedly accepted {listen:?}"),
            Err(err) => println!("rejected {bad}: {err}"),
        }
    }
    Ok(())
}
