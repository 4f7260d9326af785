//! Resource declarations.
//!
//! A tenant's routes are declared as a tree of resources and namespaces.
//! Each resource names the subset of conventional operations it allows;
//! only those operations ever receive a route.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use axum::http::Method;

use crate::controllers::Controller;

/// The seven conventional resource operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Operation {
    Index,
    Show,
    New,
    Create,
    Edit,
    Update,
    Destroy,
}

impl Operation {
    /// Route generation order. `new` precedes member routes so that
    /// `/emails/new` is never captured by `/emails/:id`.
    pub const GENERATION_ORDER: [Operation; 7] = [
        Operation::Index,
        Operation::Create,
        Operation::New,
        Operation::Edit,
        Operation::Show,
        Operation::Update,
        Operation::Destroy,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Index => "index",
            Operation::Show => "show",
            Operation::New => "new",
            Operation::Create => "create",
            Operation::Edit => "edit",
            Operation::Update => "update",
            Operation::Destroy => "destroy",
        }
    }

    /// HTTP methods that reach this operation.
    pub fn methods(&self) -> Vec<Method> {
        match self {
            Operation::Index | Operation::Show | Operation::New | Operation::Edit => {
                vec![Method::GET]
            }
            Operation::Create => vec![Method::POST],
            Operation::Update => vec![Method::PATCH, Method::PUT],
            Operation::Destroy => vec![Method::DELETE],
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Response formats selectable by path suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    Html,
    Txt,
    Json,
}

impl Format {
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "html" | "htm" => Some(Format::Html),
            "txt" | "text" => Some(Format::Txt),
            "json" => Some(Format::Json),
            _ => None,
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            Format::Html => "html",
            Format::Txt => "txt",
            Format::Json => "json",
        }
    }

    pub fn content_type(&self) -> &'static str {
        match self {
            Format::Html => "text/html; charset=utf-8",
            Format::Txt => "text/plain; charset=utf-8",
            Format::Json => "application/json",
        }
    }
}

impl FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Format::from_extension(s).ok_or_else(|| format!("unknown format: {}", s))
    }
}

/// Whether a resource is a singleton or a collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    /// `resource :health`: no index, no id segment.
    Singular,
    /// `resources :emails`: member operations carry an `:id` segment.
    Plural,
}

/// A named noun exposed through a restricted set of operations.
#[derive(Clone)]
pub struct Resource {
    pub(crate) name: String,
    pub(crate) kind: Kind,
    pub(crate) only: Vec<Operation>,
    pub(crate) formats: Vec<Format>,
    pub(crate) shallow: bool,
    pub(crate) controller: Arc<dyn Controller>,
    pub(crate) nested: Vec<Entry>,
}

impl Resource {
    /// Declare a singular resource. Allows every singular operation until
    /// narrowed with [`Resource::only`].
    pub fn singular(name: impl Into<String>, controller: Arc<dyn Controller>) -> Self {
        Self::new(name, Kind::Singular, controller)
    }

    /// Declare a plural resource. Allows all seven operations until
    /// narrowed with [`Resource::only`].
    pub fn plural(name: impl Into<String>, controller: Arc<dyn Controller>) -> Self {
        Self::new(name, Kind::Plural, controller)
    }

    fn new(name: impl Into<String>, kind: Kind, controller: Arc<dyn Controller>) -> Self {
        let only = Operation::GENERATION_ORDER
            .into_iter()
            .filter(|op| kind == Kind::Plural || *op != Operation::Index)
            .collect();
        Self {
            name: name.into(),
            kind,
            only,
            formats: vec![Format::Html],
            shallow: false,
            controller,
            nested: Vec::new(),
        }
    }

    /// Restrict the resource to the given operations.
    pub fn only(mut self, ops: impl IntoIterator<Item = Operation>) -> Self {
        let mut only: Vec<Operation> = ops.into_iter().collect();
        only.sort();
        only.dedup();
        self.only = only;
        self
    }

    /// Formats the resource answers. Defaults to HTML only.
    pub fn formats(mut self, formats: impl IntoIterator<Item = Format>) -> Self {
        self.formats = formats.into_iter().collect();
        self
    }

    /// Member routes of nested plural resources drop this resource's prefix.
    pub fn shallow(mut self) -> Self {
        self.shallow = true;
        self
    }

    /// Nest a child resource under this one.
    pub fn nest(mut self, child: Resource) -> Self {
        self.nested.push(Entry::Resource(child));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn allows(&self, op: Operation) -> bool {
        self.only.contains(&op)
    }
}

impl fmt::Debug for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Resource")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("only", &self.only)
            .field("controller", &self.controller.name())
            .field("nested", &self.nested)
            .finish()
    }
}

/// A path and controller-name prefix with no routes of its own.
#[derive(Debug, Clone)]
pub struct Namespace {
    pub(crate) name: String,
    pub(crate) entries: Vec<Entry>,
}

impl Namespace {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: Vec::new(),
        }
    }

    pub fn resource(mut self, resource: Resource) -> Self {
        self.entries.push(Entry::Resource(resource));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// A node in the declaration tree.
#[derive(Debug, Clone)]
pub enum Entry {
    Resource(Resource),
    Namespace(Namespace),
}
