use serde::Serialize;

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

/// Directory names are relative to the working root, matching `ENV_DIRS`.
#[derive(Debug, Serialize)]
pub struct SetupReport {
    pub root: String,
    pub created: Vec<String>,
    pub existing: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct ConfigReport {
    pub config: String,
    pub present: bool,
}

#[derive(Serialize)]
pub struct RunReport {
    pub setup: SetupReport,
    pub config: ConfigReport,
}

#[derive(Serialize)]
pub struct CheckItem {
    pub name: String,
    pub status: String,
}
