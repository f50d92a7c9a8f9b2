//! Interactive SVG export.
//!
//! The diagram's SVG is cloned and every node group that nests other groups
//! gets a clickable glyph that hides or shows those groups. A serialized file
//! carries no event listeners, so the toggles call one shared script function
//! embedded in the clone.
//!
//! The export is written as XML so it opens as a standalone `.svg` file, even
//! though captures are HTML serializations (`&nbsp;`, bare `<br>`, implicit
//! `xlink` and XHTML namespaces).

use log::{debug, info};

use mapscribe_parser::{
    Selectors,
    markup::{Document, Element, Node, Selector},
};

use crate::{config::AnnotateConfig, error::MapscribeError};

const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";
const XLINK_NAMESPACE: &str = "http://www.w3.org/1999/xlink";
const XHTML_NAMESPACE: &str = "http://www.w3.org/1999/xhtml";
const TOGGLE_CLASS: &str = "toggle-btn";
const TOGGLE_STYLE: &str = ".toggle-btn { user-select: none; cursor: pointer; }";
const TOGGLE_HANDLER: &str = "mapscribeToggle(this, evt)";

/// Script body shared by all toggles. `EXPAND` and `COLLAPSE` are replaced
/// with JavaScript string literals.
const TOGGLE_SCRIPT: &str = "
function mapscribeToggle(btn, evt) {
  if (evt) { evt.stopPropagation(); }
  var node = btn.parentNode;
  var collapsed = node.getAttribute('data-collapsed') === 'true';
  node.setAttribute('data-collapsed', collapsed ? 'false' : 'true');
  var groups = node.querySelectorAll('g');
  for (var i = 0; i < groups.length; i++) {
    groups[i].style.display = collapsed ? '' : 'none';
  }
  btn.textContent = collapsed ? EXPAND : COLLAPSE;
}
";

/// Adds collapse/expand toggles to a copy of a diagram's SVG.
#[derive(Debug, Clone)]
pub struct SvgAnnotator<'a> {
    config: &'a AnnotateConfig,
}

impl<'a> SvgAnnotator<'a> {
    pub fn new(config: &'a AnnotateConfig) -> Self {
        Self { config }
    }

    /// Locates the diagram SVG in `document` and returns the annotated copy,
    /// serialized as XML.
    ///
    /// # Errors
    ///
    /// Returns [`MapscribeError::NoContainer`] when no element matches the
    /// container selector and [`MapscribeError::NoSvg`] when the container
    /// holds no `svg` element. The document is never modified.
    pub fn annotate_document(
        &self,
        document: &Document,
        selectors: &Selectors,
    ) -> Result<String, MapscribeError> {
        let container = document
            .select_first(selectors.container())
            .ok_or(MapscribeError::NoContainer)?;
        let svg = container
            .select_first(&Selector::tag("svg"))
            .ok_or(MapscribeError::NoSvg)?;

        let (annotated, toggles) = self.annotate(svg, selectors.node());
        info!(toggles; "SVG annotated");

        Ok(annotated.xml().to_string())
    }

    /// Returns a copy of `svg` with a toggle on every `node` group that
    /// contains at least one nested `g`, plus the number of toggles added.
    pub fn annotate(&self, svg: &Element, node: &Selector) -> (Element, usize) {
        let mut clone = svg.clone();
        let nested_group = Selector::tag("g");
        let mut toggles = 0usize;

        clone.visit_descendants_mut(&mut |element: &mut Element| {
            if node.matches(element) && element.select_first(&nested_group).is_some() {
                element.append(Node::Element(self.toggle()));
                toggles += 1;
            }
        });
        debug!(toggles; "Toggle controls added");

        clone.prepend(Node::Element(
            Element::new("style").with_text(TOGGLE_STYLE),
        ));
        if toggles > 0 {
            clone.append(Node::Element(self.script()));
        }
        if !clone.has_attribute("xmlns") {
            clone.set_attribute("xmlns", SVG_NAMESPACE);
        }
        declare_namespaces(&mut clone);

        (clone, toggles)
    }

    fn toggle(&self) -> Element {
        Element::new("text")
            .with_attribute("x", "0")
            .with_attribute("y", "0")
            .with_attribute("class", TOGGLE_CLASS)
            .with_attribute("font-size", &self.config.font_size().to_string())
            .with_attribute("fill", self.config.fill())
            .with_attribute("style", "cursor: pointer;")
            .with_attribute("onclick", TOGGLE_HANDLER)
            .with_text(self.config.expand_glyph())
    }

    fn script(&self) -> Element {
        let literal = |glyph: &str| serde_json::Value::from(glyph).to_string();
        let body = TOGGLE_SCRIPT
            .replace("EXPAND", &literal(self.config.expand_glyph()))
            .replace("COLLAPSE", &literal(self.config.collapse_glyph()));

        let mut script = Element::new("script").with_attribute("type", "text/javascript");
        script.append(Node::Verbatim(format!(
            "<![CDATA[{}]]>",
            body.replace("]]>", "]]]]><![CDATA[>")
        )));
        script
    }
}

/// Declares the namespaces that an HTML serialization leaves implicit.
fn declare_namespaces(svg: &mut Element) {
    let mut uses_xlink = uses_xlink_attribute(svg);

    svg.visit_descendants_mut(&mut |element: &mut Element| {
        uses_xlink |= uses_xlink_attribute(element);
        if element.is("foreignObject") {
            for child in element.child_elements_mut() {
                if !child.has_attribute("xmlns") {
                    child.set_attribute("xmlns", XHTML_NAMESPACE);
                }
            }
        }
    });

    if uses_xlink && !svg.has_attribute("xmlns:xlink") {
        svg.set_attribute("xmlns:xlink", XLINK_NAMESPACE);
    }
}

fn uses_xlink_attribute(element: &Element) -> bool {
    element
        .attribute_names()
        .any(|name| name.starts_with("xlink:"))
}
