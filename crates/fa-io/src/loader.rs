//! Network data-file loader.
//!
//! # File format
//!
//! Two sections: nodes, then edges.  The node section is the default, so
//! the `<NODES>` marker is optional.
//!
//! ```text
//! <NODES>
//! G001 Food Lion Airport Blvd
//! G002 Publix Dauphin St
//! R001 Midtown
//! I001 Airport & University
//! <EDGES>
//! G001 I001 850
//! I001 R001 1200.5
//! G002 R001 3100
//! ```
//!
//! **Node lines**: the first character selects the category.
//!
//! | Tag | Category             |
//! |-----|----------------------|
//! | `G` | grocery store        |
//! | `R` | residential area     |
//! | `I` | intersection         |
//!
//! The first whitespace-separated token is the node code; the remaining
//! tokens are its label.
//!
//! **Edge lines**: `code_a code_b weight`, exactly three tokens, weight a
//! decimal number.  Edges are undirected.
//!
//! Any line starting with `<E` opens the edge section; a line starting with
//! `<N` in the node section is skipped.  Blank lines are ignored.  Every
//! other malformed line is a [`LoadError::Parse`] carrying its 1-based line
//! number.
//!
//! Cross-references (duplicate codes, unknown edge endpoints, negative
//! weights) are not checked here; [`NetworkData::build`] hands them to the
//! catalog and graph builder, which reject them.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use tracing::{debug, info};

use fa_core::NodeKind;
use fa_graph::{AdjacencyMatrix, EdgeRecord, GraphBuilder, NodeCatalog, NodeRecord};

use crate::{LoadError, LoadResult};

// ── Parsed data ───────────────────────────────────────────────────────────────

/// Records of one data file, in file order within each category.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NetworkData {
    pub stores:        Vec<NodeRecord>,
    pub residential:   Vec<NodeRecord>,
    pub intersections: Vec<NodeRecord>,
    pub edges:         Vec<EdgeRecord>,
}

/// A catalog and its adjacency matrix, ready for a shortest-path engine.
#[derive(Clone, Debug)]
pub struct LoadedNetwork {
    pub catalog:   NodeCatalog,
    pub adjacency: AdjacencyMatrix,
}

impl NetworkData {
    pub fn node_count(&self) -> usize {
        self.stores.len() + self.residential.len() + self.intersections.len()
    }

    /// Index the nodes and build the adjacency matrix.
    ///
    /// Fails with [`LoadError::Core`] on duplicate codes, unknown edge
    /// endpoints, or invalid weights.
    pub fn build(self) -> LoadResult<LoadedNetwork> {
        let catalog = NodeCatalog::load(self.stores, self.residential, self.intersections)?;
        let adjacency = GraphBuilder::from_edges(&catalog, &self.edges)?;
        Ok(LoadedNetwork { catalog, adjacency })
    }
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
enum Section {
    Nodes,
    Edges,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a network data file.
pub fn load_network_file(path: &Path) -> LoadResult<NetworkData> {
    let file = File::open(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let data = load_network_reader(file)?;
    info!(
        path = %path.display(),
        nodes = data.node_count(),
        edges = data.edges.len(),
        "network file loaded"
    );
    Ok(data)
}

/// Like [`load_network_file`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor` or `&[u8]`).
pub fn load_network_reader<R: Read>(reader: R) -> LoadResult<NetworkData> {
    let mut data = NetworkData::default();
    let mut section = Section::Nodes;

    for (i, line) in BufReader::new(reader).lines().enumerate() {
        let line_no = i + 1;
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if line.starts_with("<E") {
            section = Section::Edges;
            continue;
        }

        match section {
            Section::Nodes => {
                if line.starts_with("<N") {
                    continue;
                }
                let (kind, record) = parse_node(line, line_no)?;
                match kind {
                    NodeKind::Store        => data.stores.push(record),
                    NodeKind::Residential  => data.residential.push(record),
                    NodeKind::Intersection => data.intersections.push(record),
                }
            }
            Section::Edges => data.edges.push(parse_edge(line, line_no)?),
        }
    }

    debug!(
        stores = data.stores.len(),
        residential = data.residential.len(),
        intersections = data.intersections.len(),
        edges = data.edges.len(),
        "network data parsed"
    );
    Ok(data)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn parse_error(line: usize, message: impl Into<String>) -> LoadError {
    LoadError::Parse { line, message: message.into() }
}

fn parse_node(line: &str, line_no: usize) -> LoadResult<(NodeKind, NodeRecord)> {
    let tag = line.chars().next().unwrap_or_default();
    let kind = NodeKind::from_tag(tag).ok_or_else(|| {
        parse_error(
            line_no,
            format!("invalid node line {line:?}: expected a code starting with G, R, or I"),
        )
    })?;

    let mut tokens = line.split_whitespace();
    // `line` is trimmed and non-empty, so there is always a first token.
    let code = tokens.next().unwrap_or_default().to_string();
    let label = tokens.map(str::to_string).collect();
    Ok((kind, NodeRecord { code, label }))
}

fn parse_edge(line: &str, line_no: usize) -> LoadResult<EdgeRecord> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let [from, to, weight] = tokens.as_slice() else {
        return Err(parse_error(
            line_no,
            format!("invalid edge line {line:?}: expected \"<code> <code> <weight>\""),
        ));
    };
    let weight = weight.parse::<f64>().map_err(|_| {
        parse_error(line_no, format!("invalid edge weight {weight:?}: expected a number"))
    })?;
    Ok(EdgeRecord::new(*from, *to, weight))
}
