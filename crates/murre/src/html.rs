use std::fmt::Write;

use indexmap::IndexMap;

#[derive(Debug, Clone)]
pub struct HtmlElement {
    pub tag_name: String,
    pub children: Vec<HtmlChild>,
    pub attrs: IndexMap<String, String>,
}

#[derive(Debug, Clone)]
pub enum HtmlChild {
    Element(HtmlElement),
    Text(String),
}

impl From<HtmlElement> for HtmlChild {
    fn from(element: HtmlElement) -> Self {
        Self::Element(element)
    }
}

impl From<String> for HtmlChild {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&str> for HtmlChild {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl HtmlElement {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag_name: tag.into(),
            children: Vec::new(),
            attrs: IndexMap::new(),
        }
    }

    pub fn attr<V>(mut self, name: impl Into<String>, value: impl Into<Option<V>>) -> Self
    where
        V: Into<String>,
    {
        let name = name.into();
        match value.into() {
            Some(value) => {
                *self.attrs.entry(name).or_default() = value.into();
            }
            None => {
                self.attrs.remove(&name);
            }
        }

        self
    }

    pub fn child(mut self, child: impl Into<HtmlChild>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = HtmlChild>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn render_to_string(&self) -> Result<String, std::fmt::Error> {
        let mut html = String::new();

        write!(&mut html, "<{}", self.tag_name)?;

        for (name, value) in &self.attrs {
            write!(&mut html, " ")?;
            write!(&mut html, r#"{name}="{value}""#)?;
        }

        write!(&mut html, ">")?;

        for child in &self.children {
            match child {
                HtmlChild::Element(element) => {
                    write!(&mut html, "{}", element.render_to_string()?)?;
                }
                HtmlChild::Text(text) => {
                    write!(&mut html, "{}", escape_html(text))?;
                }
            }
        }

        write!(&mut html, "</{}>", self.tag_name)?;

        Ok(html)
    }
}

impl HtmlElement {
    pub fn id<V>(self, id: impl Into<Option<V>>) -> Self
    where
        V: Into<String>,
    {
        self.attr("id", id)
    }

    pub fn class<V>(self, class: impl Into<Option<V>>) -> Self
    where
        V: Into<String>,
    {
        self.attr("class", class)
    }

    pub fn datetime<V>(self, datetime: impl Into<Option<V>>) -> Self
    where
        V: Into<String>,
    {
        self.attr("datetime", datetime)
    }
}

pub fn time() -> HtmlElement {
    HtmlElement::new("time")
}

pub fn span() -> HtmlElement {
    HtmlElement::new("span")
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
