//! DOT text interchange.
//!
//! Reads and writes the edge-only subset of the DOT language: one
//! `<from> -> <to>;` line per edge inside a `digraph G { ... }` block.
//! The format is lossy on purpose: weights, node names, and isolated
//! nodes are not round-tripped.

use crate::graph::Graph;
use crate::traits::DirectedGraph;
use graf_core::Edge;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt::Write as _;
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

/// Default file extension for DOT files.
pub const DEFAULT_EXTENSION: &str = ".gv";

// Whitespace-tolerant around the arrow; anything else on the line is
// ignored, so node declarations and braces never match.
static EDGE_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+)\s*->\s*(\d+);").expect("edge-line pattern must compile"));

/// Errors surfaced by DOT file import/export.
#[derive(Debug, Error)]
pub enum DotError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid node id: {0}")]
    InvalidId(#[from] std::num::ParseIntError),
}

impl Graph {
    /// Renders the graph in DOT syntax.
    ///
    /// Emits `digraph G {`, one `  <from> -> <to>;` line per edge in
    /// `all_edges` order, and a closing `}`. Weights and node names are
    /// dropped; isolated nodes do not appear at all.
    pub fn to_dot_string(&self) -> String {
        let mut out = String::from("digraph G {\n");
        for edge in self.all_edges() {
            let _ = writeln!(out, "  {} -> {};", edge.from().id(), edge.to().id());
        }
        out.push_str("}\n");
        out
    }

    /// Writes the DOT rendering to `<name>.gv`.
    pub fn to_dot_file(&self, name: &str) -> Result<(), DotError> {
        self.to_dot_file_with_extension(name, DEFAULT_EXTENSION)
    }

    /// Writes the DOT rendering to `<name><extension>`, relative to the
    /// working directory.
    pub fn to_dot_file_with_extension(&self, name: &str, extension: &str) -> Result<(), DotError> {
        let path = dot_path(name, extension);
        match write_dot(&path, &self.to_dot_string()) {
            Ok(()) => {
                debug!("Wrote {} edges to {}", self.nb_edges(), path.display());
                Ok(())
            }
            Err(e) => {
                warn!("Failed to write DOT file {}: {}", path.display(), e);
                Err(e)
            }
        }
    }

    /// Reads a graph from `<name>.gv`.
    pub fn from_dot_file(name: &str) -> Result<Graph, DotError> {
        Self::from_dot_file_with_extension(name, DEFAULT_EXTENSION)
    }

    /// Reads a graph from `<name><extension>`.
    ///
    /// Every line containing `<digits> -> <digits>;` contributes one
    /// unweighted edge, with both endpoints created as needed; all other
    /// lines are skipped. I/O failure or an id that does not fit in an
    /// `i32` aborts the read with an error.
    pub fn from_dot_file_with_extension(name: &str, extension: &str) -> Result<Graph, DotError> {
        let path = dot_path(name, extension);
        match read_dot(&path) {
            Ok(graph) => {
                debug!(
                    "Read {} nodes and {} edges from {}",
                    graph.nb_nodes(),
                    graph.nb_edges(),
                    path.display()
                );
                Ok(graph)
            }
            Err(e) => {
                warn!("Failed to read DOT file {}: {}", path.display(), e);
                Err(e)
            }
        }
    }
}

fn dot_path(name: &str, extension: &str) -> PathBuf {
    PathBuf::from(format!("{}{}", name, extension))
}

fn write_dot(path: &Path, text: &str) -> Result<(), DotError> {
    let mut file = File::create(path)?;
    file.write_all(text.as_bytes())?;
    Ok(())
}

fn read_dot(path: &Path) -> Result<Graph, DotError> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let mut graph = Graph::new();
    for line in reader.lines() {
        let line = line?;
        if let Some(caps) = EDGE_LINE.captures(&line) {
            let from_id: i32 = caps[1].parse()?;
            let to_id: i32 = caps[2].parse()?;
            graph.add_edge(Edge::between(from_id, to_id));
        }
    }
    Ok(graph)
}
