//! SVG serialization of a [`Figure`].

use std::fmt;

use super::{Element, Figure};

/// Display adapter writing a figure as a standalone SVG document.
pub(super) struct Svg<'a>(pub &'a Figure);

impl fmt::Display for Svg<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fig = self.0;
        let style = &fig.style;

        writeln!(
            f,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" font-family="sans-serif">"#,
            w = fig.width,
            h = fig.height,
        )?;
        writeln!(
            f,
            r#"  <rect width="100%" height="100%" fill="{}"/>"#,
            Escaped(&style.background)
        )?;
        writeln!(
            f,
            r#"  <text class="title" x="{:.2}" y="{:.2}" text-anchor="middle" font-size="{}">{}</text>"#,
            fig.width / 2.0,
            style.margin / 2.0 + style.title_font_size / 2.0,
            style.title_font_size,
            Escaped(&fig.title)
        )?;

        // Painter's order: edges under nodes, labels on top
        writeln!(
            f,
            r#"  <g class="edges" stroke="{}" stroke-width="1" fill="none">"#,
            Escaped(&style.edge_color)
        )?;
        for element in &fig.elements {
            match element {
                Element::Edge { from, to } => writeln!(
                    f,
                    r#"    <line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}"/>"#,
                    from.x, from.y, to.x, to.y
                )?,
                Element::Loop { at } => writeln!(
                    f,
                    r#"    <circle cx="{:.2}" cy="{:.2}" r="{:.2}"/>"#,
                    at.x,
                    at.y - style.node_radius,
                    style.node_radius
                )?,
                _ => {}
            }
        }
        writeln!(f, "  </g>")?;

        writeln!(
            f,
            r#"  <g class="nodes" font-size="{}" font-weight="bold" text-anchor="middle" dominant-baseline="central">"#,
            style.font_size
        )?;
        for element in &fig.elements {
            if let Element::Node { at, name } = element {
                writeln!(
                    f,
                    r#"    <circle cx="{:.2}" cy="{:.2}" r="{:.2}" fill="{}"/>"#,
                    at.x,
                    at.y,
                    style.node_radius,
                    Escaped(&style.node_color)
                )?;
                let mut buf = [0u8; 4];
                writeln!(
                    f,
                    r#"    <text x="{:.2}" y="{:.2}">{}</text>"#,
                    at.x,
                    at.y,
                    Escaped(name.encode_utf8(&mut buf))
                )?;
            }
        }
        writeln!(f, "  </g>")?;

        writeln!(
            f,
            r#"  <g class="edge-labels" font-size="{}" text-anchor="middle" dominant-baseline="central" stroke="{}" stroke-width="3" paint-order="stroke">"#,
            style.font_size,
            Escaped(&style.background)
        )?;
        for element in &fig.elements {
            if let Element::EdgeLabel { at, text } = element {
                writeln!(
                    f,
                    r#"    <text x="{:.2}" y="{:.2}">{}</text>"#,
                    at.x,
                    at.y,
                    Escaped(text)
                )?;
            }
        }
        writeln!(f, "  </g>")?;

        writeln!(f, "</svg>")
    }
}

/// XML text/attribute escaping.
pub(super) struct Escaped<'a>(pub &'a str);

impl fmt::Display for Escaped<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut rest = self.0;
        while let Some(pos) = rest.find(['&', '<', '>', '"', '\'']) {
            f.write_str(&rest[..pos])?;
            let entity = match rest.as_bytes()[pos] {
                b'&' => "&amp;",
                b'<' => "&lt;",
                b'>' => "&gt;",
                b'"' => "&quot;",
                _ => "&apos;",
            };
            f.write_str(entity)?;
            rest = &rest[pos + 1..];
        }
        f.write_str(rest)
    }
}
