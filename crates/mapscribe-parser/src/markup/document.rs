//! Element tree built from markup tokens.
//!
//! Values are kept exactly as they appeared in the source (still escaped), so
//! re-serializing an untouched tree reproduces its markup. Accessors decode
//! entities on the way out and mutators escape on the way in.
//!
//! `Display` writes the source form back. [`Element::xml`] writes well-formed
//! XML instead: entities are decoded to characters, valueless attributes get
//! an empty value and every empty element is self-closed.

use std::{borrow::Cow, fmt};

use indexmap::IndexMap;

use super::{
    Selector,
    lexer::{self, StartTag, Token, is_raw_text_element},
};

/// Name of the synthetic element that holds a document's top-level nodes.
const DOCUMENT_NAME: &str = "#document";

/// HTML elements that never have content or an end tag.
const VOID_ELEMENTS: [&str; 14] = [
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

fn is_void_element(name: &str) -> bool {
    VOID_ELEMENTS
        .iter()
        .any(|void| void.eq_ignore_ascii_case(name))
}

/// A node in the element tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    /// Character data in source (escaped) form.
    Text(String),
    /// Comment body.
    Comment(String),
    /// Declaration, processing instruction or CDATA section, written back verbatim.
    Verbatim(String),
}

impl Node {
    /// Creates a text node from unescaped text.
    pub fn text(text: &str) -> Self {
        Node::Text(htmlize::escape_text(text).into_owned())
    }
}

/// An element with ordered attributes and child nodes.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    name: String,
    attributes: IndexMap<String, Option<String>>,
    children: Vec<Node>,
}

impl Element {
    /// Creates an empty element.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: IndexMap::new(),
            children: Vec::new(),
        }
    }

    fn from_start_tag(tag: &StartTag<'_>) -> Self {
        let mut element = Self::new(tag.name);
        for (name, value) in &tag.attributes {
            // The first occurrence of a repeated attribute wins.
            element
                .attributes
                .entry((*name).to_string())
                .or_insert_with(|| value.map(str::to_string));
        }
        element
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether this element's name is `name`, ignoring ASCII case.
    pub fn is(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }

    /// Returns the decoded value of attribute `name`.
    ///
    /// Valueless attributes (`<input hidden>`) yield an empty string.
    pub fn attribute(&self, name: &str) -> Option<Cow<'_, str>> {
        self.attributes
            .get(name)
            .map(|value| htmlize::unescape(value.as_deref().unwrap_or_default()))
    }

    pub fn has_attribute(&self, name: &str) -> bool {
        self.attributes.contains_key(name)
    }

    /// Attribute names in source order.
    pub fn attribute_names(&self) -> impl Iterator<Item = &str> {
        self.attributes.keys().map(String::as_str)
    }

    /// Sets attribute `name` to the unescaped `value`, keeping its position if
    /// it already exists.
    pub fn set_attribute(&mut self, name: &str, value: &str) {
        let escaped = htmlize::escape_attribute(value).into_owned();
        self.attributes.insert(name.to_string(), Some(escaped));
    }

    /// Sets an attribute and returns the element (builder style).
    pub fn with_attribute(mut self, name: &str, value: &str) -> Self {
        self.set_attribute(name, value);
        self
    }

    /// Whether the `class` attribute contains the token `class`.
    pub fn has_class(&self, class: &str) -> bool {
        self.attribute("class")
            .is_some_and(|classes| classes.split_whitespace().any(|token| token == class))
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Appends `node`, merging adjacent text.
    pub fn append(&mut self, node: Node) {
        if let Node::Text(text) = &node {
            if let Some(Node::Text(last)) = self.children.last_mut() {
                last.push_str(text);
                return;
            }
        }
        self.children.push(node);
    }

    /// Inserts `node` before all other children.
    pub fn prepend(&mut self, node: Node) {
        self.children.insert(0, node);
    }

    /// Appends unescaped text and returns the element (builder style).
    pub fn with_text(mut self, text: &str) -> Self {
        self.append(Node::text(text));
        self
    }

    /// Child elements, skipping text and comments.
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|node| match node {
            Node::Element(element) => Some(element),
            _ => None,
        })
    }

    pub fn child_elements_mut(&mut self) -> impl Iterator<Item = &mut Element> {
        self.children.iter_mut().filter_map(|node| match node {
            Node::Element(element) => Some(element),
            _ => None,
        })
    }

    /// All descendant elements in document (pre-)order, excluding `self`.
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants {
            stack: vec![self.children.iter()],
        }
    }

    /// Descendant elements matching `selector`, in document order.
    pub fn select<'a>(&'a self, selector: &'a Selector) -> impl Iterator<Item = &'a Element> + 'a {
        self.descendants()
            .filter(move |element| selector.matches(element))
    }

    /// First descendant element matching `selector`.
    pub fn select_first(&self, selector: &Selector) -> Option<&Element> {
        self.descendants().find(|element| selector.matches(element))
    }

    /// Concatenated, decoded text of all descendant text nodes.
    pub fn text_content(&self) -> String {
        let mut content = String::new();
        let mut stack = vec![self.children.iter()];

        while let Some(children) = stack.last_mut() {
            match children.next() {
                Some(Node::Text(text)) => content.push_str(&htmlize::unescape(text.as_str())),
                Some(Node::Element(element)) => stack.push(element.children.iter()),
                Some(Node::Comment(_) | Node::Verbatim(_)) => {}
                None => {
                    stack.pop();
                }
            }
        }

        content
    }

    /// Calls `visit` on every descendant element, parents before children.
    ///
    /// Nodes that `visit` appends to an element are visited as well.
    pub fn visit_descendants_mut(&mut self, visit: &mut dyn FnMut(&mut Element)) {
        let mut stack = vec![self.children.iter_mut()];

        while let Some(children) = stack.last_mut() {
            match children.next() {
                Some(Node::Element(element)) => {
                    visit(element);
                    stack.push(element.children.iter_mut());
                }
                Some(_) => {}
                None => {
                    stack.pop();
                }
            }
        }
    }

    /// Serializes the element and its subtree as well-formed XML.
    ///
    /// # Examples
    ///
    /// ```
    /// use mapscribe_parser::markup::Document;
    ///
    /// let doc = Document::parse("<p class=note hidden>Fish&nbsp;&amp; chips<br></p>");
    /// let p = doc.root().child_elements().next().unwrap();
    ///
    /// assert_eq!(
    ///     p.xml().to_string(),
    ///     "<p class=\"note\" hidden=\"\">Fish\u{a0}&amp; chips<br/></p>"
    /// );
    /// ```
    pub fn xml(&self) -> Xml<'_> {
        Xml(self)
    }
}

/// Output flavour of the markup writer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Syntax {
    /// Values exactly as read, HTML void elements as bare start tags.
    Source,
    /// Decoded and re-escaped values, every empty element self-closed.
    Xml,
}

enum Step<'a> {
    Open(&'a Element),
    Child(&'a Node, bool),
    Close(&'a Element),
}

/// Writes `root` and its subtree without recursing.
fn write_tree(root: &Element, syntax: Syntax, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let mut stack = vec![Step::Open(root)];

    while let Some(step) = stack.pop() {
        match step {
            Step::Open(element) => {
                write_start_tag(element, syntax, f)?;

                if element.children.is_empty() {
                    let bare = syntax == Syntax::Source && is_void_element(&element.name);
                    f.write_str(if bare { ">" } else { "/>" })?;
                    continue;
                }

                f.write_str(">")?;
                stack.push(Step::Close(element));
                let raw_text = is_raw_text_element(&element.name);
                stack.extend(
                    element
                        .children
                        .iter()
                        .rev()
                        .map(|child| Step::Child(child, raw_text)),
                );
            }
            Step::Child(Node::Element(element), _) => stack.push(Step::Open(element)),
            Step::Child(node, raw_text) => write_leaf(node, raw_text, syntax, f)?,
            Step::Close(element) => write!(f, "</{}>", element.name)?,
        }
    }

    Ok(())
}

fn write_start_tag(element: &Element, syntax: Syntax, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "<{}", element.name)?;
    for (name, value) in &element.attributes {
        match (syntax, value) {
            (Syntax::Source, Some(value)) => {
                write!(f, " {}=\"{}\"", name, value.replace('"', "&quot;"))?
            }
            (Syntax::Source, None) => write!(f, " {name}")?,
            (Syntax::Xml, value) => {
                let decoded = htmlize::unescape(value.as_deref().unwrap_or_default());
                write!(f, " {}=\"{}\"", name, htmlize::escape_attribute(decoded))?
            }
        }
    }
    Ok(())
}

fn write_leaf(node: &Node, raw_text: bool, syntax: Syntax, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match (syntax, node) {
        (_, Node::Element(element)) => write_tree(element, syntax, f),
        (Syntax::Source, Node::Text(text) | Node::Verbatim(text)) => f.write_str(text),
        (Syntax::Source, Node::Comment(body)) => write!(f, "<!--{body}-->"),
        // Raw-text content was never entity-encoded.
        (Syntax::Xml, Node::Text(text)) if raw_text => {
            if text.contains(['<', '&']) {
                write!(f, "<![CDATA[{}]]>", text.replace("]]>", "]]]]><![CDATA[>"))
            } else {
                f.write_str(text)
            }
        }
        (Syntax::Xml, Node::Text(text)) => {
            let decoded = htmlize::unescape(text.as_str());
            f.write_str(&htmlize::escape_text(decoded))
        }
        (Syntax::Xml, Node::Comment(body)) => {
            let mut spaced = String::with_capacity(body.len());
            for c in body.chars() {
                if c == '-' && spaced.ends_with('-') {
                    spaced.push(' ');
                }
                spaced.push(c);
            }
            let pad = if spaced.ends_with('-') { " " } else { "" };
            write!(f, "<!--{spaced}{pad}-->")
        }
        // Only CDATA sections and processing instructions may appear inside an XML element.
        (Syntax::Xml, Node::Verbatim(raw)) => {
            let is_xml_declaration = raw
                .get(..5)
                .is_some_and(|prefix| prefix.eq_ignore_ascii_case("<?xml"));
            if raw.starts_with("<![CDATA[") || (raw.starts_with("<?") && !is_xml_declaration) {
                f.write_str(raw)?;
            }
            Ok(())
        }
    }
}

/// Well-formed XML rendering of an [`Element`], see [`Element::xml`].
#[derive(Debug, Clone, Copy)]
pub struct Xml<'a>(&'a Element);

impl fmt::Display for Xml<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_tree(self.0, Syntax::Xml, f)
    }
}

/// Serializes the element and its subtree as markup.
impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_tree(self, Syntax::Source, f)
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Element(element) => write_tree(element, Syntax::Source, f),
            node => write_leaf(node, false, Syntax::Source, f),
        }
    }
}

/// Pre-order iterator over descendant elements.
///
/// Uses an explicit stack of child iterators. Text collection, mutable
/// visits and both serializers walk the same way; cloning and dropping a
/// tree still recurse.
#[derive(Debug, Clone)]
pub struct Descendants<'a> {
    stack: Vec<std::slice::Iter<'a, Node>>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a Element;

    fn next(&mut self) -> Option<&'a Element> {
        loop {
            let children = self.stack.last_mut()?;
            match children.next() {
                Some(Node::Element(element)) => {
                    self.stack.push(element.children.iter());
                    return Some(element);
                }
                Some(_) => {}
                None => {
                    self.stack.pop();
                }
            }
        }
    }
}

/// A parsed markup document.
///
/// # Examples
///
/// ```
/// use mapscribe_parser::markup::{Document, Selector};
///
/// let doc = Document::parse(r#"<div class="mindmap"><svg><g class="node"/></svg></div>"#);
/// let node = Selector::parse("g.node");
/// assert_eq!(doc.select(&node).count(), 1);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    root: Element,
}

impl Document {
    /// Parses `source` into a document.
    ///
    /// Never fails. Unclosed elements are closed at the end of input, end tags
    /// close every element opened after their nearest matching start tag, and
    /// stray end tags are dropped.
    pub fn parse(source: &str) -> Self {
        let mut stack = vec![Element::new(DOCUMENT_NAME)];

        for token in lexer::tokenize(source) {
            match token {
                Token::Text(text) => append_node(&mut stack, Node::Text(text.to_string())),
                Token::Comment(body) => append_node(&mut stack, Node::Comment(body.to_string())),
                Token::Verbatim(raw) => append_node(&mut stack, Node::Verbatim(raw.to_string())),
                Token::StartTag(tag) => {
                    let element = Element::from_start_tag(&tag);
                    if tag.self_closing || is_void_element(tag.name) {
                        append_node(&mut stack, Node::Element(element));
                    } else {
                        stack.push(element);
                    }
                }
                Token::EndTag(name) => {
                    // Index 0 is the document itself, which no tag name matches.
                    if let Some(open) = stack.iter().rposition(|element| element.is(name)) {
                        while stack.len() > open {
                            close_innermost(&mut stack);
                        }
                    }
                }
            }
        }

        while stack.len() > 1 {
            close_innermost(&mut stack);
        }

        let root = stack
            .pop()
            .unwrap_or_else(|| Element::new(DOCUMENT_NAME));
        Self { root }
    }

    /// The synthetic element holding the top-level nodes.
    pub fn root(&self) -> &Element {
        &self.root
    }

    /// All elements in document order.
    pub fn descendants(&self) -> Descendants<'_> {
        self.root.descendants()
    }

    /// Elements matching `selector`, in document order.
    pub fn select<'a>(&'a self, selector: &'a Selector) -> impl Iterator<Item = &'a Element> + 'a {
        self.root.select(selector)
    }

    /// First element matching `selector`.
    pub fn select_first(&self, selector: &Selector) -> Option<&Element> {
        self.root.select_first(selector)
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for child in self.root.children() {
            write!(f, "{child}")?;
        }
        Ok(())
    }
}

fn append_node(stack: &mut [Element], node: Node) {
    if let Some(current) = stack.last_mut() {
        current.append(node);
    }
}

/// Pops the innermost open element into its parent. The document itself is never popped.
fn close_innermost(stack: &mut Vec<Element>) {
    if stack.len() < 2 {
        return;
    }
    if let Some(element) = stack.pop() {
        append_node(stack, Node::Element(element));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(doc: &Document) -> Vec<&str> {
        doc.descendants().map(Element::name).collect()
    }

    #[test]
    fn test_parse_nested_elements() {
        let doc = Document::parse("<svg><g><rect/><text>A</text></g></svg>");
        assert_eq!(names(&doc), vec!["svg", "g", "rect", "text"]);
    }

    #[test]
    fn test_void_elements_take_no_children() {
        let doc = Document::parse(r#"<head><meta charset="utf-8"><title>x</title></head>"#);
        let head = doc.root().child_elements().next().unwrap();

        let children: Vec<&str> = head.child_elements().map(Element::name).collect();
        assert_eq!(children, vec!["meta", "title"]);
    }

    #[test]
    fn test_mismatched_end_tag_closes_intermediate_elements() {
        let doc = Document::parse("<div><p><b>bold</div><span/>");
        let top: Vec<&str> = doc.root().child_elements().map(Element::name).collect();

        assert_eq!(top, vec!["div", "span"]);
        assert_eq!(names(&doc), vec!["div", "p", "b", "span"]);
    }

    #[test]
    fn test_stray_end_tag_is_ignored() {
        let doc = Document::parse("<g></text>hello</g>");
        let g = doc.root().child_elements().next().unwrap();

        assert_eq!(g.text_content(), "hello");
    }

    #[test]
    fn test_unclosed_elements_are_closed_at_end() {
        let doc = Document::parse("<svg><g><text>A");
        assert_eq!(names(&doc), vec!["svg", "g", "text"]);
        assert_eq!(doc.root().text_content(), "A");
    }

    #[test]
    fn test_end_tags_match_case_insensitively() {
        let doc = Document::parse("<DIV><p>x</P></div>");
        assert_eq!(names(&doc), vec!["DIV", "p"]);
    }

    #[test]
    fn test_text_content_decodes_entities_and_joins_descendants() {
        let doc = Document::parse("<text>Fish &amp; <tspan>Chips</tspan> &lt;3</text>");
        let text = doc.root().child_elements().next().unwrap();

        assert_eq!(text.text_content(), "Fish & Chips <3");
    }

    #[test]
    fn test_attribute_access_decodes() {
        let doc = Document::parse(r#"<g title="a &amp; b" hidden></g>"#);
        let g = doc.root().child_elements().next().unwrap();

        assert_eq!(g.attribute("title").as_deref(), Some("a & b"));
        assert_eq!(g.attribute("hidden").as_deref(), Some(""));
        assert!(g.attribute("missing").is_none());
        assert!(g.has_attribute("hidden"));
    }

    #[test]
    fn test_has_class_matches_tokens() {
        let doc = Document::parse(r#"<g class="node  root"></g><g class="nodes"></g>"#);
        let mut elements = doc.root().child_elements();

        let first = elements.next().unwrap();
        assert!(first.has_class("node"));
        assert!(first.has_class("root"));

        let second = elements.next().unwrap();
        assert!(!second.has_class("node"));
    }

    #[test]
    fn test_round_trip_preserves_markup() {
        let source = concat!(
            r#"<!DOCTYPE html><svg viewBox="0 0 10 10"><!-- c -->"#,
            r#"<g class="node" transform="translate(1, 2)"><text>A &amp; B</text></g>"#,
            r#"<rect width="3"/></svg>"#,
        );
        let doc = Document::parse(source);

        assert_eq!(doc.to_string(), source);
    }

    #[test]
    fn test_serialize_normalizes_quotes_and_empty_elements() {
        let doc = Document::parse(r#"<g data-q='say "hi"'></g><br>"#);
        assert_eq!(doc.to_string(), r#"<g data-q="say &quot;hi&quot;"/><br>"#);
    }

    #[test]
    fn test_set_attribute_escapes_and_keeps_position() {
        let mut element = Element::new("text")
            .with_attribute("class", "toggle-btn")
            .with_attribute("x", "0");
        element.set_attribute("class", "a\"b");

        assert_eq!(element.to_string(), r#"<text class="a&quot;b" x="0"/>"#);
        assert_eq!(element.attribute("class").as_deref(), Some("a\"b"));
    }

    #[test]
    fn test_with_text_escapes() {
        let element = Element::new("text").with_text("<");
        assert_eq!(element.to_string(), "<text>&lt;</text>");
        assert_eq!(element.text_content(), "<");
    }

    #[test]
    fn test_append_merges_adjacent_text() {
        let doc = Document::parse("a < b");
        assert_eq!(doc.root().children(), &[Node::Text("a < b".to_string())]);
    }

    #[test]
    fn test_prepend_inserts_first() {
        let mut element = Element::new("svg").with_text("x");
        element.prepend(Node::Element(Element::new("style")));

        assert_eq!(element.to_string(), "<svg><style/>x</svg>");
    }

    #[test]
    fn test_visit_descendants_mut_sees_every_element() {
        let mut doc = Document::parse("<svg><g><g/></g><rect/></svg>");
        let mut visited = Vec::new();
        doc.root
            .visit_descendants_mut(&mut |element: &mut Element| visited.push(element.name().to_string()));

        assert_eq!(visited, vec!["svg", "g", "g", "rect"]);
    }

    #[test]
    fn test_select_and_select_first() {
        let doc = Document::parse(
            r#"<svg><path class="link" d="M0 0"/><g class="node"/><path class="link" d="M1 1"/></svg>"#,
        );
        let links = Selector::parse("path.link");

        let ds: Vec<String> = doc
            .select(&links)
            .filter_map(|path| path.attribute("d").map(Cow::into_owned))
            .collect();
        assert_eq!(ds, vec!["M0 0", "M1 1"]);
        assert_eq!(
            doc.select_first(&Selector::parse(".node")).map(Element::name),
            Some("g")
        );
    }

    #[test]
    fn test_xml_decodes_entities_and_closes_void_elements() {
        let doc = Document::parse(
            r#"<div data-x='a "b"' hidden><span>1&nbsp;&lt;&nbsp;2 &copy; R&amp;D</span><br><img src=a.png></div>"#,
        );
        let div = doc.root().child_elements().next().unwrap();

        assert_eq!(
            div.xml().to_string(),
            "<div data-x=\"a &quot;b&quot;\" hidden=\"\"><span>1\u{a0}&lt;\u{a0}2 \u{a9} R&amp;D</span><br/><img src=\"a.png\"/></div>"
        );
    }

    #[test]
    fn test_xml_raw_text_uses_cdata_only_when_needed() {
        let doc = Document::parse("<svg><style>.a { fill: red; }</style><script>if (a < b && c) {}</script></svg>");
        let svg = doc.root().child_elements().next().unwrap();

        assert_eq!(
            svg.xml().to_string(),
            "<svg><style>.a { fill: red; }</style><script><![CDATA[if (a < b && c) {}]]></script></svg>"
        );
    }

    #[test]
    fn test_xml_splits_cdata_terminator_in_raw_text() {
        let doc = Document::parse("<script>a[b[0]]>1 && x</script>");
        let script = doc.root().child_elements().next().unwrap();

        assert_eq!(
            script.xml().to_string(),
            "<script><![CDATA[a[b[0]]]]><![CDATA[>1 && x]]></script>"
        );
    }

    #[test]
    fn test_xml_comment_bodies_stay_well_formed() {
        let mut g = Element::new("g");
        g.append(Node::Comment("a--b".to_string()));
        g.append(Node::Comment("---".to_string()));
        g.append(Node::Comment(" ok ".to_string()));

        assert_eq!(g.xml().to_string(), "<g><!--a- -b--><!--- - - --><!-- ok --></g>");
    }

    #[test]
    fn test_source_form_is_unchanged_by_xml_rendering() {
        let source = r#"<div hidden><p>a&nbsp;b<br></p></div>"#;
        let doc = Document::parse(source);
        let div = doc.root().child_elements().next().unwrap();
        let _ = div.xml().to_string();

        assert_eq!(doc.to_string(), source);
    }

    #[test]
    fn test_deeply_nested_tree_walks_without_recursion() {
        const DEPTH: usize = 5_000;
        let source = format!("{}leaf{}", "<g>".repeat(DEPTH), "</g>".repeat(DEPTH));
        let mut doc = Document::parse(&source);

        assert_eq!(doc.descendants().count(), DEPTH);
        assert_eq!(doc.root().text_content(), "leaf");
        assert_eq!(doc.to_string(), source);
        assert!(doc.root().xml().to_string().ends_with("leaf</g></g>"));

        let mut visited = 0;
        doc.root.visit_descendants_mut(&mut |_: &mut Element| visited += 1);
        assert_eq!(visited, DEPTH);
    }

    #[test]
    fn test_visit_descendants_mut_descends_into_appended_children() {
        let mut doc = Document::parse("<svg><g/></svg>");
        let mut visited = Vec::new();
        doc.root.visit_descendants_mut(&mut |element: &mut Element| {
            if element.is("g") {
                element.append(Node::Element(Element::new("text")));
            }
            visited.push(element.name().to_string());
        });

        assert_eq!(visited, vec!["svg", "g", "text"]);
    }

    #[test]
    fn test_attribute_names_keep_source_order() {
        let doc = Document::parse(r##"<a xlink:href="#n" class="x" id="y"/>"##);
        let a = doc.root().child_elements().next().unwrap();

        assert_eq!(a.attribute_names().collect::<Vec<_>>(), vec!["xlink:href", "class", "id"]);
    }
}
