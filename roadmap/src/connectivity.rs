use std::collections::VecDeque;

use crate::{city_map::CityMap, error::MapError};

/// Number of cells reachable from `(index, index)` without leaving the
/// subgrid `x >= index, y >= index`. Roads are walked in both directions.
pub fn reachable_from<const N: usize>(map: &CityMap<N>, index: usize) -> usize {
    if index >= N {
        return 0;
    }

    let mut visited = vec![[false; N]; N];
    let mut queue = VecDeque::with_capacity(N * 2);
    visited[index][index] = true;
    queue.push_back((index, index));
    let mut reached = 1;

    while let Some((x, y)) = queue.pop_front() {
        let here = map.get(x, y);
        let mut next: [Option<(usize, usize)>; 4] = [None; 4];

        if here.links_y() && y + 1 < N {
            next[0] = Some((x, y + 1));
        }
        if here.links_x() && x + 1 < N {
            next[1] = Some((x + 1, y));
        }
        if y > index && map.get(x, y - 1).links_y() {
            next[2] = Some((x, y - 1));
        }
        if x > index && map.get(x - 1, y).links_x() {
            next[3] = Some((x - 1, y));
        }

        for (nx, ny) in next.into_iter().flatten() {
            if !visited[ny][nx] {
                visited[ny][nx] = true;
                reached += 1;
                queue.push_back((nx, ny));
            }
        }
    }

    reached
}

pub fn is_frontier_connected<const N: usize>(map: &CityMap<N>, index: usize) -> bool {
    index < N && reachable_from(map, index) == (N - index) * (N - index)
}

/// Fails with [`MapError::Disconnected`] unless every cell of the map can
/// reach every other one.
pub fn check_connected<const N: usize>(map: &CityMap<N>) -> Result<(), MapError> {
    let total = N * N;
    let reached = reachable_from(map, 0);
    if reached != total {
        return Err(MapError::Disconnected { reached, total });
    }
    Ok(())
}
