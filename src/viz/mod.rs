//! Network export for external visualization tools

use crate::analysis::AnalysisReport;
use crate::error::Result;
use crate::graph::{Graph, NodeId};
use serde_json::Value;
use std::collections::HashMap;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

pub const NETWORK_FILE: &str = "network.xgmml";

/// Write the analyzed graph, annotated with combined scores, for Cytoscape
/// and similar tools
pub fn generate_visualizations(
    report: &AnalysisReport,
    graph: &Graph,
    network_name: &str,
    output_dir: impl AsRef<Path>,
) -> Result<()> {
    let viz_dir = output_dir.as_ref().join("visualizations");
    fs::create_dir_all(&viz_dir)?;

    log::info!("Generating network export in {}", viz_dir.display());

    let file = File::create(viz_dir.join(NETWORK_FILE))?;
    let mut writer = BufWriter::new(file);
    write_xgmml(
        graph,
        network_name,
        Some(&report.combined_centrality()),
        Some(&report.combined_delta()),
        &mut writer,
    )?;
    writer.flush()?;

    Ok(())
}

/// Escape the five XML special characters
pub fn xml_escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

fn attr_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Write `graph` as XGMML.
///
/// Nodes are numbered from 1 in graph order and labelled with their ID. Node
/// and edge attributes become `<att>` elements; the optional combined maps add
/// `Combined Centrality` and `Combined Delta` node attributes.
pub fn write_xgmml<W: Write>(
    graph: &Graph,
    network_name: &str,
    combined_centrality: Option<&HashMap<NodeId, f64>>,
    combined_delta: Option<&HashMap<NodeId, f64>>,
    out: &mut W,
) -> Result<()> {
    writeln!(out, "<?xml version=\"1.0\" encoding=\"UTF-8\"?>")?;
    writeln!(
        out,
        "<graph label=\"{}\" xmlns=\"http://www.cs.rpi.edu/XGMML\" directed=\"{}\">",
        xml_escape(network_name),
        u8::from(graph.is_directed())
    )?;

    for (idx, node) in graph.node_ids().iter().enumerate() {
        writeln!(out, "  <node id=\"{}\" label=\"{}\">", idx + 1, xml_escape(node))?;

        if let Some(attrs) = graph.node_attrs(node) {
            for (key, value) in attrs.iter() {
                writeln!(
                    out,
                    "    <att name=\"{}\" value=\"{}\"/>",
                    xml_escape(key),
                    xml_escape(&attr_text(value))
                )?;
            }
        }
        if let Some(value) = combined_centrality.and_then(|m| m.get(node)) {
            writeln!(out, "    <att name=\"Combined Centrality\" value=\"{value}\"/>")?;
        }
        if let Some(value) = combined_delta.and_then(|m| m.get(node)) {
            writeln!(out, "    <att name=\"Combined Delta\" value=\"{value}\"/>")?;
        }

        writeln!(out, "  </node>")?;
    }

    for (edge, &(s, t)) in graph.edges().iter().zip(graph.edge_endpoints()) {
        writeln!(out, "  <edge source=\"{}\" target=\"{}\">", s + 1, t + 1)?;
        for (key, value) in edge.attrs.iter() {
            writeln!(
                out,
                "    <att name=\"{}\" value=\"{}\"/>",
                xml_escape(key),
                xml_escape(&attr_text(value))
            )?;
        }
        writeln!(out, "  </edge>")?;
    }

    writeln!(out, "</graph>")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Attributes;

    #[test]
    fn xgmml_lists_nodes_and_edges() {
        let mut g = Graph::undirected();
        g.add_node("a&b", Attributes::new().with("group", "x"));
        g.add_weighted_edge("a&b", "c", 2.0);

        let mut combined = HashMap::new();
        combined.insert("c".to_string(), 0.5);

        let mut buf = Vec::new();
        write_xgmml(&g, "net", Some(&combined), None, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert!(text.contains("<node id=\"1\" label=\"a&amp;b\">"));
        assert!(text.contains("<att name=\"group\" value=\"x\"/>"));
        assert!(text.contains("<edge source=\"1\" target=\"2\">"));
        assert!(text.contains("<att name=\"weight\" value=\"2.0\"/>"));
        assert!(text.contains("<att name=\"Combined Centrality\" value=\"0.5\"/>"));
        assert!(!text.contains("Combined Delta"));
    }
}
