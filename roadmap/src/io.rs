use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::Path,
};

use crate::{city_map::CityMap, error::MapError, road::RoadCode};

/// Writes one line per row, every code followed by a single space.
pub fn write_map<const N: usize, W: Write>(map: &CityMap<N>, mut out: W) -> Result<(), MapError> {
    write!(out, "{map}")?;
    out.flush()?;
    Ok(())
}

/// Creates or truncates `path` and writes `map` into it.
pub fn save_map<const N: usize>(map: &CityMap<N>, path: impl AsRef<Path>) -> Result<(), MapError> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_map(map, &mut writer)?;
    writer.into_inner().map_err(|e| e.into_error())?.sync_all()?;
    Ok(())
}

/// Parses a map written by [`write_map`]. Tokens are split on any
/// whitespace; blank lines after the last row are ignored.
pub fn read_map<const N: usize, R: BufRead>(input: R) -> Result<CityMap<N>, MapError> {
    let mut map = CityMap::new();
    let mut rows = 0;

    for line in input.lines() {
        let line = line?;
        if rows >= N {
            if line.trim().is_empty() {
                continue;
            }
            return Err(MapError::RowCount {
                expected: N,
                found: rows + 1,
            });
        }

        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() != N {
            return Err(MapError::ColumnCount {
                row: rows,
                expected: N,
                found: tokens.len(),
            });
        }
        for (x, token) in tokens.into_iter().enumerate() {
            let code = token
                .parse::<u8>()
                .ok()
                .and_then(RoadCode::new)
                .ok_or_else(|| MapError::BadCode {
                    row: rows,
                    column: x,
                    token: token.to_string(),
                })?;
            map.set(x, rows, code);
        }
        rows += 1;
    }

    if rows != N {
        return Err(MapError::RowCount {
            expected: N,
            found: rows,
        });
    }
    Ok(map)
}

pub fn load_map<const N: usize>(path: impl AsRef<Path>) -> Result<CityMap<N>, MapError> {
    let file = File::open(path)?;
    read_map(BufReader::new(file))
}
