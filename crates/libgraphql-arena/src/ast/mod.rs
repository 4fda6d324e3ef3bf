//! The arena AST.
//!
//! A [`Document`] stores every node of a parsed GraphQL document in flat
//! per-kind tables. Nodes refer to each other by [`Ref`] (an index into a
//! table) or by [`Node`] (a table kind plus a ref), and siblings are threaded
//! together through intrusive `next` links headed by a [`RefList`].

mod delimited_list;
mod description;
mod directive;
mod directive_definition;
mod document;
mod document_names;
mod document_schema;
mod document_types;
mod document_values;
mod fragment_definition;
mod index;
mod node;
mod operation_definition;
pub(crate) mod ref_list;
mod schema_definition;
mod selection;
mod type_definitions;
mod type_ref;
mod value;

pub use delimited_list::DelimitedList;
pub use description::Description;
pub use directive::Argument;
pub use directive::Directive;
pub use directive::DirectiveList;
pub use directive_definition::DirectiveDefinition;
pub use directive_definition::DirectiveLocation;
pub use directive_definition::DirectiveLocations;
pub use document::Document;
pub use fragment_definition::FragmentDefinition;
pub use index::Index;
pub use node::Node;
pub use node::NodeKind;
pub use node::Ref;
pub use operation_definition::OperationDefinition;
pub use operation_definition::OperationType;
pub use operation_definition::VariableDefinition;
pub use ref_list::Linked;
pub use ref_list::RefList;
pub use ref_list::RefListBuilder;
pub use ref_list::RefListIter;
pub use schema_definition::Extension;
pub use schema_definition::RootOperationTypeDefinition;
pub use schema_definition::SchemaDefinition;
pub use schema_definition::SchemaExtension;
pub use selection::Alias;
pub use selection::Field;
pub use selection::FragmentSpread;
pub use selection::InlineFragment;
pub use selection::Selection;
pub use selection::SelectionKind;
pub use selection::SelectionSet;
pub use selection::TypeCondition;
pub use type_definitions::EnumTypeDefinition;
pub use type_definitions::EnumTypeExtension;
pub use type_definitions::EnumValueDefinition;
pub use type_definitions::FieldDefinition;
pub use type_definitions::InputObjectTypeDefinition;
pub use type_definitions::InputObjectTypeExtension;
pub use type_definitions::InputValueDefinition;
pub use type_definitions::InterfaceTypeDefinition;
pub use type_definitions::InterfaceTypeExtension;
pub use type_definitions::ObjectTypeDefinition;
pub use type_definitions::ObjectTypeExtension;
pub use type_definitions::ScalarTypeDefinition;
pub use type_definitions::ScalarTypeExtension;
pub use type_definitions::UnionTypeDefinition;
pub use type_definitions::UnionTypeExtension;
pub use type_ref::Type;
pub use type_ref::TypeKind;
pub use value::DefaultValue;
pub use value::EnumValue;
pub use value::FloatValue;
pub use value::IntValue;
pub use value::ListValue;
pub use value::ObjectField;
pub use value::ObjectValue;
pub use value::StringValue;
pub use value::Value;
pub use value::ValueKind;
pub use value::VariableValue;

#[cfg(test)]
mod tests;
