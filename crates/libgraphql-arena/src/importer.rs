//! Deep copies of nodes from one [`Document`] into another.
//!
//! Both documents own their own [`Input`](crate::Input), so every literal
//! (names, numbers, string contents) is re-interned into the target's input
//! with [`append_input_bytes()`](crate::Input::append_input_bytes). The copy
//! shares nothing with the source: the source may be reset or dropped
//! afterwards.
//!
//! Positions describe a location in the *source* text, which the target
//! doesn't contain, so imported nodes carry unset positions.

use crate::ByteSliceReference;
use crate::Position;
use crate::ast::Alias;
use crate::ast::Argument;
use crate::ast::DefaultValue;
use crate::ast::DelimitedList;
use crate::ast::Directive;
use crate::ast::DirectiveList;
use crate::ast::Document;
use crate::ast::EnumValue;
use crate::ast::Field;
use crate::ast::FloatValue;
use crate::ast::FragmentDefinition;
use crate::ast::FragmentSpread;
use crate::ast::InlineFragment;
use crate::ast::IntValue;
use crate::ast::ListValue;
use crate::ast::Node;
use crate::ast::NodeKind;
use crate::ast::ObjectField;
use crate::ast::ObjectValue;
use crate::ast::OperationDefinition;
use crate::ast::Ref;
use crate::ast::RefListBuilder;
use crate::ast::Selection;
use crate::ast::SelectionKind;
use crate::ast::SelectionSet;
use crate::ast::StringValue;
use crate::ast::Type;
use crate::ast::TypeCondition;
use crate::ast::TypeKind;
use crate::ast::Value;
use crate::ast::ValueKind;
use crate::ast::VariableDefinition;
use crate::ast::VariableValue;

/// Copies subtrees between documents. Stateless; every method takes the
/// source ref, the source document and the target document and returns the
/// new ref in the target.
#[derive(Clone, Copy, Debug, Default)]
pub struct Importer;

fn import_literal(
    literal: ByteSliceReference,
    from: &Document,
    to: &mut Document,
) -> ByteSliceReference {
    to.input.append_input_bytes(from.input.byte_slice(literal))
}

fn unset() -> Position {
    Position::default()
}

impl Importer {
    pub fn new() -> Self {
        Self
    }

    pub fn import_type(&self, type_ref: Ref, from: &Document, to: &mut Document) -> Ref {
        let source = from.types[type_ref as usize];
        let imported = match (source.kind, source.of_type) {
            (TypeKind::Named, _) | (_, None) => {
                Type::named(import_literal(source.name, from, to), unset())
            },
            (TypeKind::List, Some(of_type)) => {
                let of_type = self.import_type(of_type, from, to);
                Type::list(of_type, unset(), unset())
            },
            (TypeKind::NonNull, Some(of_type)) => {
                let of_type = self.import_type(of_type, from, to);
                Type::non_null(of_type, unset(), unset())
            },
        };
        to.put_type(imported)
    }

    pub fn import_value(&self, value: Ref, from: &Document, to: &mut Document) -> Ref {
        let source = from.values[value as usize];
        let r = source.value_ref as usize;
        let value_ref = match source.kind {
            ValueKind::Variable => {
                let name = import_literal(from.variable_values[r].name, from, to);
                to.put_variable_value(VariableValue {
                    dollar: unset(),
                    name,
                    position: unset(),
                })
            },
            ValueKind::Int => {
                let int_value = from.int_values[r];
                let raw = import_literal(int_value.raw, from, to);
                to.put_int_value(IntValue {
                    negative_sign: int_value.negative_sign.map(|_| unset()),
                    raw,
                    position: unset(),
                })
            },
            ValueKind::Float => {
                let float_value = from.float_values[r];
                let raw = import_literal(float_value.raw, from, to);
                to.put_float_value(FloatValue {
                    negative_sign: float_value.negative_sign.map(|_| unset()),
                    raw,
                    position: unset(),
                })
            },
            ValueKind::String => {
                let string_value = from.string_values[r];
                let content = import_literal(string_value.content, from, to);
                to.put_string_value(StringValue {
                    content,
                    block_string: string_value.block_string,
                    position: unset(),
                })
            },
            ValueKind::Boolean | ValueKind::Null => source.value_ref,
            ValueKind::Enum => {
                let name = import_literal(from.enum_values[r].name, from, to);
                to.put_enum_value(EnumValue {
                    name,
                    position: unset(),
                })
            },
            ValueKind::List => {
                let mut values = RefListBuilder::new();
                for item in from.list_values[r].values.iter(&from.values) {
                    let imported = self.import_value(item, from, to);
                    values.push(&mut to.values, imported);
                }
                to.put_list_value(ListValue {
                    lbrack: unset(),
                    rbrack: unset(),
                    values: values.finish(),
                })
            },
            ValueKind::Object => {
                let mut fields = RefListBuilder::new();
                for field in from.object_values[r].fields.iter(&from.object_fields) {
                    let source_field = from.object_fields[field as usize];
                    let name = import_literal(source_field.name, from, to);
                    let value = self.import_value(source_field.value, from, to);
                    let imported = to.put_object_field(ObjectField {
                        name,
                        colon: unset(),
                        value,
                        position: unset(),
                        next: None,
                    });
                    fields.push(&mut to.object_fields, imported);
                }
                to.put_object_value(ObjectValue {
                    lbrace: unset(),
                    rbrace: unset(),
                    fields: fields.finish(),
                })
            },
        };
        to.put_value(Value {
            kind: source.kind,
            value_ref,
            position: unset(),
            next: None,
        })
    }

    pub fn import_argument(&self, argument: Ref, from: &Document, to: &mut Document) -> Ref {
        let source = from.arguments[argument as usize];
        let name = import_literal(source.name, from, to);
        let value = self.import_value(source.value, from, to);
        to.put_argument(Argument {
            name,
            colon: unset(),
            value,
            position: unset(),
            next: None,
        })
    }

    pub fn import_arguments(
        &self,
        arguments: DelimitedList,
        from: &Document,
        to: &mut Document,
    ) -> DelimitedList {
        let mut refs = RefListBuilder::new();
        for argument in arguments.refs.iter(&from.arguments) {
            let imported = self.import_argument(argument, from, to);
            refs.push(&mut to.arguments, imported);
        }
        DelimitedList {
            open: unset(),
            close: unset(),
            refs: refs.finish(),
        }
    }

    pub fn import_directive(&self, directive: Ref, from: &Document, to: &mut Document) -> Ref {
        let source = from.directives[directive as usize];
        let name = import_literal(source.name, from, to);
        let arguments = self.import_arguments(source.arguments, from, to);
        to.put_directive(Directive {
            at: unset(),
            name,
            arguments,
            position: unset(),
            next: None,
        })
    }

    pub fn import_directives(
        &self,
        directives: DirectiveList,
        from: &Document,
        to: &mut Document,
    ) -> DirectiveList {
        let mut refs = RefListBuilder::new();
        for directive in directives.iter(&from.directives) {
            let imported = self.import_directive(directive, from, to);
            refs.push(&mut to.directives, imported);
        }
        refs.finish()
    }

    pub fn import_variable_definition(
        &self,
        variable_definition: Ref,
        from: &Document,
        to: &mut Document,
    ) -> Ref {
        let source = from.variable_definitions[variable_definition as usize];
        let name = import_literal(source.name, from, to);
        let type_ref = self.import_type(source.type_ref, from, to);
        let default_value = source.default_value.map(|default_value| DefaultValue {
            equals: unset(),
            value: self.import_value(default_value.value, from, to),
        });
        let directives = self.import_directives(source.directives, from, to);
        to.put_variable_definition(VariableDefinition {
            dollar: unset(),
            name,
            colon: unset(),
            type_ref,
            default_value,
            directives,
            position: unset(),
            next: None,
        })
    }

    pub fn import_variable_definitions(
        &self,
        variable_definitions: DelimitedList,
        from: &Document,
        to: &mut Document,
    ) -> DelimitedList {
        let mut refs = RefListBuilder::new();
        for variable_definition in variable_definitions.refs.iter(&from.variable_definitions) {
            let imported = self.import_variable_definition(variable_definition, from, to);
            refs.push(&mut to.variable_definitions, imported);
        }
        DelimitedList {
            open: unset(),
            close: unset(),
            refs: refs.finish(),
        }
    }

    /// Recursively imports a selection set with all of its fields, inline
    /// fragments and fragment spreads.
    pub fn import_selection_set(
        &self,
        selection_set: Ref,
        from: &Document,
        to: &mut Document,
    ) -> Ref {
        let mut selections = RefListBuilder::new();
        for selection in from.selection_sets[selection_set as usize]
            .selections
            .iter(&from.selections)
        {
            let source = from.selections[selection as usize];
            let node_ref = match source.kind {
                SelectionKind::Field => self.import_field(source.node_ref, from, to),
                SelectionKind::InlineFragment => {
                    self.import_inline_fragment(source.node_ref, from, to)
                },
                SelectionKind::FragmentSpread => {
                    self.import_fragment_spread(source.node_ref, from, to)
                },
            };
            let imported = to.put_selection(Selection {
                kind: source.kind,
                node_ref,
                next: None,
            });
            selections.push(&mut to.selections, imported);
        }
        to.put_selection_set(SelectionSet {
            lbrace: unset(),
            rbrace: unset(),
            selections: selections.finish(),
        })
    }

    pub fn import_field(&self, field: Ref, from: &Document, to: &mut Document) -> Ref {
        let source = from.fields[field as usize];
        let alias = source.alias.map(|alias| Alias {
            name: import_literal(alias.name, from, to),
            colon: unset(),
        });
        let name = import_literal(source.name, from, to);
        let arguments = self.import_arguments(source.arguments, from, to);
        let directives = self.import_directives(source.directives, from, to);
        let selection_set = source
            .selection_set
            .map(|selection_set| self.import_selection_set(selection_set, from, to));
        to.put_field(Field {
            alias,
            name,
            arguments,
            directives,
            selection_set,
            position: unset(),
        })
    }

    pub fn import_inline_fragment(
        &self,
        inline_fragment: Ref,
        from: &Document,
        to: &mut Document,
    ) -> Ref {
        let source = from.inline_fragments[inline_fragment as usize];
        let type_condition = source
            .type_condition
            .map(|type_condition| self.import_type_condition(type_condition, from, to));
        let directives = self.import_directives(source.directives, from, to);
        let selection_set = self.import_selection_set(source.selection_set, from, to);
        to.put_inline_fragment(InlineFragment {
            spread: unset(),
            type_condition,
            directives,
            selection_set,
            position: unset(),
        })
    }

    pub fn import_fragment_spread(
        &self,
        fragment_spread: Ref,
        from: &Document,
        to: &mut Document,
    ) -> Ref {
        let source = from.fragment_spreads[fragment_spread as usize];
        let fragment_name = import_literal(source.fragment_name, from, to);
        let directives = self.import_directives(source.directives, from, to);
        to.put_fragment_spread(FragmentSpread {
            spread: unset(),
            fragment_name,
            directives,
            position: unset(),
        })
    }

    fn import_type_condition(
        &self,
        type_condition: TypeCondition,
        from: &Document,
        to: &mut Document,
    ) -> TypeCondition {
        TypeCondition {
            on: unset(),
            named_type: self.import_type(type_condition.named_type, from, to),
        }
    }

    /// Imports an operation and appends it to the target's root nodes.
    pub fn import_operation_definition(
        &self,
        operation: Ref,
        from: &Document,
        to: &mut Document,
    ) -> Ref {
        let source = from.operation_definitions[operation as usize];
        let name = source.name.map(|name| import_literal(name, from, to));
        let variable_definitions =
            self.import_variable_definitions(source.variable_definitions, from, to);
        let directives = self.import_directives(source.directives, from, to);
        let selection_set = self.import_selection_set(source.selection_set, from, to);
        let imported = to.put_operation_definition(OperationDefinition {
            operation_type: source.operation_type,
            operation_type_position: source.operation_type_position.map(|_| unset()),
            name,
            variable_definitions,
            directives,
            selection_set,
            position: unset(),
        });
        to.add_root_node(Node::new(NodeKind::OperationDefinition, imported));
        imported
    }

    /// Imports a fragment definition and appends it to the target's root
    /// nodes.
    pub fn import_fragment_definition(
        &self,
        fragment: Ref,
        from: &Document,
        to: &mut Document,
    ) -> Ref {
        let source = from.fragment_definitions[fragment as usize];
        let name = import_literal(source.name, from, to);
        let type_condition = self.import_type_condition(source.type_condition, from, to);
        let directives = self.import_directives(source.directives, from, to);
        let selection_set = self.import_selection_set(source.selection_set, from, to);
        let imported = to.put_fragment_definition(FragmentDefinition {
            fragment_keyword: unset(),
            name,
            type_condition,
            directives,
            selection_set,
            position: unset(),
        });
        to.add_root_node(Node::new(NodeKind::FragmentDefinition, imported));
        imported
    }
}
