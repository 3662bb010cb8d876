//! Field-level merge of a decoded layer into the accumulated config

use crate::domain::{Config, ConfigLayer, DatabaseConfig, DatabaseLayer};

/// Apply `layer` on top of `acc`. Fields the layer sets win; the rest are kept.
pub fn merge(mut acc: Config, layer: ConfigLayer) -> Config {
    if let Some(db) = layer.database {
        merge_database(&mut acc.database, db);
    }
    acc
}

fn merge_database(acc: &mut DatabaseConfig, layer: DatabaseLayer) {
    let DatabaseLayer { host, port, user, password, database } = layer;
    overwrite(&mut acc.host, host);
    overwrite(&mut acc.port, port);
    overwrite(&mut acc.user, user);
    overwrite(&mut acc.password, password);
    overwrite(&mut acc.database, database);
}

fn overwrite(slot: &mut String, value: Option<String>) {
    if let Some(v) = value {
        *slot = v;
    }
}
