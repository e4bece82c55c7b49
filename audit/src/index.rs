//! Index of documented items collected from parsed Rust sources.
//!
//! Only what a caller can reach is indexed: `pub` inherent methods and
//! consts, the methods of public traits, and trait impls. Items marked
//! `#[doc(hidden)]` and `#[cfg(test)]` modules are skipped.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use syn::{
    Attribute, Expr, ExprLit, File, Ident, ImplItem, Item, ItemImpl, ItemTrait, Lit, Meta,
    TraitItem, Type, Visibility,
};

/// Where an operation visible on a type comes from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Origin {
    /// Declared in an inherent `impl Type` block.
    Inherent,
    /// Implemented in an `impl Trait for Type` block.
    Implemented(String),
    /// A default trait method the type does not override.
    Provided(String),
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Origin::Inherent => f.write_str("inherent"),
            Origin::Implemented(name) => write!(f, "impl {name}"),
            Origin::Provided(name) => write!(f, "provided by {name}"),
        }
    }
}

/// An operation resolved on a type, with the doc text that applies to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operation {
    /// Method or const name.
    pub name: String,
    /// Where the operation is declared.
    pub origin: Origin,
    /// Doc text that applies, if any.
    pub doc: Option<String>,
}

impl Operation {
    /// Whether the doc text exists and is not blank.
    #[must_use]
    pub fn is_documented(&self) -> bool {
        self.doc.as_deref().is_some_and(|doc| !doc.trim().is_empty())
    }
}

#[derive(Debug, Clone)]
struct Method {
    name: String,
    doc: Option<String>,
}

#[derive(Debug, Clone)]
struct TraitMethod {
    name: String,
    doc: Option<String>,
    provided: bool,
}

#[derive(Debug, Clone)]
struct TraitImpl {
    trait_name: String,
    methods: Vec<Method>,
}

#[derive(Debug, Default)]
pub(crate) struct SourceIndex {
    types: BTreeSet<String>,
    traits: BTreeMap<String, Vec<TraitMethod>>,
    inherent: BTreeMap<String, Vec<Method>>,
    trait_impls: BTreeMap<String, Vec<TraitImpl>>,
}

impl SourceIndex {
    pub(crate) fn add_file(&mut self, file: &File) {
        self.add_items(&file.items);
    }

    pub(crate) fn declares(&self, type_name: &str) -> bool {
        self.types.contains(type_name)
    }

    /// Every operation visible on `type_name`, in source order.
    pub(crate) fn operations(&self, type_name: &str, skip_abstract: bool) -> Vec<Operation> {
        let mut operations: Vec<Operation> = self
            .inherent
            .get(type_name)
            .into_iter()
            .flatten()
            .map(|method| Operation {
                name: method.name.clone(),
                origin: Origin::Inherent,
                doc: method.doc.clone(),
            })
            .collect();

        for imp in self.trait_impls.get(type_name).into_iter().flatten() {
            // Foreign traits are documented where they are declared.
            let Some(declared) = self.traits.get(&imp.trait_name) else {
                continue;
            };
            for method in declared {
                if !method.provided && skip_abstract {
                    continue;
                }
                let overridden = imp.methods.iter().find(|m| m.name == method.name);
                let operation = match overridden {
                    Some(own) => Operation {
                        name: method.name.clone(),
                        origin: Origin::Implemented(imp.trait_name.clone()),
                        doc: own.doc.clone().or_else(|| method.doc.clone()),
                    },
                    None => Operation {
                        name: method.name.clone(),
                        origin: Origin::Provided(imp.trait_name.clone()),
                        doc: method.doc.clone(),
                    },
                };
                operations.push(operation);
            }
        }

        operations
    }

    fn add_items(&mut self, items: &[Item]) {
        for item in items {
            match item {
                Item::Struct(item) if is_visible(&item.vis, &item.attrs) => {
                    self.types.insert(item.ident.to_string());
                }
                Item::Enum(item) if is_visible(&item.vis, &item.attrs) => {
                    self.types.insert(item.ident.to_string());
                }
                Item::Trait(item) if is_visible(&item.vis, &item.attrs) => self.add_trait(item),
                Item::Impl(item) => self.add_impl(item),
                Item::Mod(module) if !is_test_only(&module.attrs) => {
                    if let Some((_, items)) = &module.content {
                        self.add_items(items);
                    }
                }
                _ => {}
            }
        }
    }

    fn add_trait(&mut self, item: &ItemTrait) {
        let methods = item
            .items
            .iter()
            .filter_map(|trait_item| match trait_item {
                TraitItem::Fn(method) if !is_hidden(&method.attrs) => Some(TraitMethod {
                    name: method.sig.ident.to_string(),
                    doc: doc_text(&method.attrs),
                    provided: method.default.is_some(),
                }),
                _ => None,
            })
            .collect();
        self.traits.insert(item.ident.to_string(), methods);
    }

    fn add_impl(&mut self, item: &ItemImpl) {
        let Some(type_name) = type_name(&item.self_ty) else {
            return;
        };

        match &item.trait_ {
            // Negative impls add no operations.
            Some((Some(_), _, _)) => {}
            Some((None, path, _)) => {
                let Some(trait_name) = path.segments.last().map(|s| s.ident.to_string()) else {
                    return;
                };
                let methods = impl_methods(item, |_| true);
                self.trait_impls
                    .entry(type_name)
                    .or_default()
                    .push(TraitImpl {
                        trait_name,
                        methods,
                    });
            }
            None => {
                let methods = impl_methods(item, |vis| matches!(vis, Visibility::Public(_)));
                self.inherent.entry(type_name).or_default().extend(methods);
            }
        }
    }
}

fn impl_methods(item: &ItemImpl, visible: impl Fn(&Visibility) -> bool) -> Vec<Method> {
    item.items
        .iter()
        .filter_map(|impl_item| match impl_item {
            ImplItem::Fn(method) if visible(&method.vis) && !is_hidden(&method.attrs) => {
                Some(Method {
                    name: method.sig.ident.to_string(),
                    doc: doc_text(&method.attrs),
                })
            }
            ImplItem::Const(constant) if visible(&constant.vis) && !is_hidden(&constant.attrs) => {
                Some(Method {
                    name: constant.ident.to_string(),
                    doc: doc_text(&constant.attrs),
                })
            }
            _ => None,
        })
        .collect()
}

fn type_name(ty: &Type) -> Option<String> {
    match ty {
        Type::Path(path) => path.path.segments.last().map(|s| s.ident.to_string()),
        Type::Reference(reference) => type_name(&reference.elem),
        Type::Paren(inner) => type_name(&inner.elem),
        _ => None,
    }
}

fn is_visible(vis: &Visibility, attrs: &[Attribute]) -> bool {
    matches!(vis, Visibility::Public(_)) && !is_hidden(attrs)
}

/// `#[doc(hidden)]`
fn is_hidden(attrs: &[Attribute]) -> bool {
    attrs.iter().any(|attr| {
        attr.path().is_ident("doc")
            && attr
                .parse_args::<Ident>()
                .is_ok_and(|ident| ident == "hidden")
    })
}

/// `#[cfg(test)]`
fn is_test_only(attrs: &[Attribute]) -> bool {
    attrs.iter().any(|attr| {
        attr.path().is_ident("cfg")
            && attr
                .parse_args::<Ident>()
                .is_ok_and(|ident| ident == "test")
    })
}

/// The concatenated `///` and `#[doc = "..."]` text, or `None` if there is none.
pub(crate) fn doc_text(attrs: &[Attribute]) -> Option<String> {
    let lines: Vec<String> = attrs
        .iter()
        .filter(|attr| attr.path().is_ident("doc"))
        .filter_map(|attr| match &attr.meta {
            Meta::NameValue(pair) => match &pair.value {
                Expr::Lit(ExprLit {
                    lit: Lit::Str(text),
                    ..
                }) => Some(text.value()),
                _ => None,
            },
            _ => None,
        })
        .collect();

    if lines.is_empty() {
        None
    } else {
        Some(lines.join("\n"))
    }
}
