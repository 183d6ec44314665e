//! Argument parsing helpers for the CLI layer.

/// Parse a human-readable byte-size string to a u64.
///
/// Supports:
/// - "1G" or "1g" -> 1_000_000_000
/// - "512M" -> 512_000_000
/// - "100K" or "100k" -> 100_000
/// - "1_000_000" -> 1_000_000
/// - "1000000" -> 1_000_000
pub fn parse_size(s: &str) -> Result<u64, String> {
    let s = s.trim();

    // Handle suffix multipliers
    if let Some(prefix) = s.strip_suffix('G').or_else(|| s.strip_suffix('g')) {
        let num: f64 = prefix
            .replace('_', "")
            .parse()
            .map_err(|e| format!("Invalid size '{}': {}", s, e))?;
        return Ok((num * 1_000_000_000.0) as u64);
    }

    if let Some(prefix) = s.strip_suffix('M').or_else(|| s.strip_suffix('m')) {
        let num: f64 = prefix
            .replace('_', "")
            .parse()
            .map_err(|e| format!("Invalid size '{}': {}", s, e))?;
        return Ok((num * 1_000_000.0) as u64);
    }

    if let Some(prefix) = s.strip_suffix('K').or_else(|| s.strip_suffix('k')) {
        let num: f64 = prefix
            .replace('_', "")
            .parse()
            .map_err(|e| format!("Invalid size '{}': {}", s, e))?;
        return Ok((num * 1_000.0) as u64);
    }

    // Raw number (possibly with underscores)
    s.replace('_', "")
        .parse::<u64>()
        .map_err(|e| format!("Invalid size '{}': {}", s, e))
}

/// Reject zero values before any allocation or thread creation happens.
pub fn validate(num_threads: u32, size_bytes: u64) -> Result<(), String> {
    if num_threads == 0 {
        return Err("num_threads must be a positive integer".to_string());
    }
    if size_bytes == 0 {
        return Err("size_bytes must be a positive integer".to_string());
    }
    Ok(())
}
