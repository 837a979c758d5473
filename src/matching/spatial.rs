//! Spatial matcher - runs of adjacent keys on a keyboard layout.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use super::adjacency;
use super::{Match, MatchKind};

/// Characters that require the shift key on qwerty-style layouts.
const SHIFTED_CHARS: &str = "~!@#$%^&*()_+QWERTYUIOP{}|ASDFGHJKL:\"ZXCVBNM<>?";

pub(crate) struct SpatialGraph {
    pub name: &'static str,
    adjacencies: HashMap<char, &'static [Option<&'static str>]>,
    /// Number of keys, i.e. possible starting positions for a walk.
    pub starting_positions: f64,
    /// Mean number of neighbors per key.
    pub average_degree: f64,
    keyboard: bool,
}

impl SpatialGraph {
    fn new(name: &'static str, data: &'static [adjacency::KeyNeighbors], keyboard: bool) -> Self {
        let adjacencies: HashMap<char, &'static [Option<&'static str>]> =
            data.iter().map(|(c, ns)| (*c, *ns)).collect();
        let degree_sum: usize = adjacencies
            .values()
            .map(|ns| ns.iter().filter(|n| n.is_some()).count())
            .sum();
        let keys = adjacencies.len() as f64;
        Self {
            name,
            adjacencies,
            starting_positions: keys,
            average_degree: degree_sum as f64 / keys,
            keyboard,
        }
    }
}

static SPATIAL_GRAPHS: Lazy<Vec<SpatialGraph>> = Lazy::new(|| {
    vec![
        SpatialGraph::new("qwerty", adjacency::QWERTY, true),
        SpatialGraph::new("dvorak", adjacency::DVORAK, true),
        SpatialGraph::new("keypad", adjacency::KEYPAD, false),
        SpatialGraph::new("mac_keypad", adjacency::MAC_KEYPAD, false),
    ]
});

/// Looks up a graph by name, for the guess estimator.
pub(crate) fn graph_lookup(name: &str) -> Option<&'static SpatialGraph> {
    SPATIAL_GRAPHS.iter().find(|g| g.name == name)
}

/// Finds maximal runs of length >= 3 where each character is adjacent to the
/// previous one in some keyboard graph.
pub(crate) fn spatial_match(chars: &[char]) -> Vec<Match> {
    let mut matches = Vec::new();
    for graph in SPATIAL_GRAPHS.iter() {
        matches.extend(spatial_match_helper(chars, graph));
    }
    matches.sort_by_key(|m| (m.i, m.j));
    matches
}

fn spatial_match_helper(chars: &[char], graph: &SpatialGraph) -> Vec<Match> {
    let n = chars.len();
    let mut matches = Vec::new();
    let mut i = 0;

    while i + 1 < n {
        let mut j = i + 1;
        let mut last_direction: Option<usize> = None;
        let mut turns = 0;
        let mut shifted_count =
            usize::from(graph.keyboard && SHIFTED_CHARS.contains(chars[i]));

        loop {
            let mut found = false;
            if j < n {
                let cur = chars[j];
                let adjacents = graph
                    .adjacencies
                    .get(&chars[j - 1])
                    .copied()
                    .unwrap_or(&[]);
                for (direction, adjacent) in adjacents.iter().enumerate() {
                    let Some(adjacent) = adjacent else { continue };
                    if let Some(position) = adjacent.chars().position(|c| c == cur) {
                        found = true;
                        // position 1 in the neighbor string is the shifted variant
                        if position == 1 {
                            shifted_count += 1;
                        }
                        if last_direction != Some(direction) {
                            turns += 1;
                            last_direction = Some(direction);
                        }
                        break;
                    }
                }
            }

            if found {
                j += 1;
            } else {
                if j - i > 2 {
                    matches.push(Match::new(
                        MatchKind::Spatial {
                            graph_name: graph.name.to_string(),
                            turns,
                            shifted_count,
                        },
                        i,
                        j - 1,
                        chars[i..j].iter().collect(),
                    ));
                }
                i = j;
                break;
            }
        }
    }

    matches
}
