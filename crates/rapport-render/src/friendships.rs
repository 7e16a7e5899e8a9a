//! Friendship ranking as plain text, JSON, or YAML-like text.

use std::fmt::Write;

use rapport_core::config::FriendshipFormat;
use rapport_relations::graph::node_label;
use rapport_relations::Friendship;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// Render in the requested format. Only the JSON format can fail.
pub fn render_friendships(
    friendships: &[Friendship],
    format: FriendshipFormat,
    prefix: &str,
) -> serde_json::Result<String> {
    match format {
        FriendshipFormat::Plain => Ok(plain_text(friendships, prefix)),
        FriendshipFormat::Json => json(friendships, prefix),
        FriendshipFormat::Yaml => Ok(yaml_like(friendships, prefix)),
    }
}

/// One paragraph per friendship, blank line after each.
pub fn plain_text(friendships: &[Friendship], prefix: &str) -> String {
    let mut out = String::new();
    for friendship in friendships {
        let _ = writeln!(
            out,
            "{} and {} has {} connections",
            node_label(prefix, friendship.node_a),
            node_label(prefix, friendship.node_b),
            friendship.grade
        );
        out.push_str("their current topics are\n");
        for statement in &friendship.shared_statements {
            let _ = writeln!(out, "\"{statement}\"");
        }
        out.push('\n');
    }
    out
}

/// `{"net": {"leg 1": {"who": [..], "connections": n, "topics": [..]}, ...}}`,
/// legs in ranking order.
pub fn json(friendships: &[Friendship], prefix: &str) -> serde_json::Result<String> {
    #[derive(Serialize)]
    struct Root<'a> {
        net: Net<'a>,
    }

    serde_json::to_string_pretty(&Root {
        net: Net {
            friendships,
            prefix,
        },
    })
}

pub fn yaml_like(friendships: &[Friendship], prefix: &str) -> String {
    let mut out = String::from("net:\n");
    for (i, friendship) in friendships.iter().enumerate() {
        let _ = writeln!(out, " - leg {}:", i + 1);
        out.push_str("     who:\n");
        let _ = writeln!(out, "       - \"{}\"", node_label(prefix, friendship.node_a));
        let _ = writeln!(out, "       - \"{}\"", node_label(prefix, friendship.node_b));
        let _ = writeln!(out, "     connections: {}", friendship.grade);
        out.push_str("     topics:\n");
        for statement in &friendship.shared_statements {
            let _ = writeln!(out, "        - \"{statement}\"");
        }
    }
    out
}

/// Ordered map of `"leg k"` entries.
struct Net<'a> {
    friendships: &'a [Friendship],
    prefix: &'a str,
}

#[derive(Serialize)]
struct Leg<'a> {
    who: [String; 2],
    connections: usize,
    topics: &'a [String],
}

impl Serialize for Net<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.friendships.len()))?;
        for (i, friendship) in self.friendships.iter().enumerate() {
            let leg = Leg {
                who: [
                    node_label(self.prefix, friendship.node_a),
                    node_label(self.prefix, friendship.node_b),
                ],
                connections: friendship.grade,
                topics: &friendship.shared_statements,
            };
            map.serialize_entry(&format!("leg {}", i + 1), &leg)?;
        }
        map.end()
    }
}
