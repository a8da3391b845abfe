/// Maps a parameter name below `path` to a flat environment variable name:
/// `/app/` + `/app/db/host` becomes `db_host`. Case is kept as stored.
pub fn env_name(path: &str, name: &str) -> String {
    name.strip_prefix(path)
        .unwrap_or(name)
        .trim_matches('/')
        .replace('/', "_")
}
