use crate::ast::Node;
use crate::ast::NodeKind;
use crate::ast::Ref;
use crate::walker::Instruction;
use crate::walker::VisitContext;
use crate::walker::Walker;
use std::cell::RefCell;
use std::rc::Rc;

/// Declares an enter and a leave visitor trait for each walked node kind,
/// the `Rc<RefCell<_>>` forwarding impls, the [`Walker`] registration
/// methods and the per-kind callback lists.
macro_rules! node_visitors {
    ($(
        $(#[$doc:meta])*
        $kind:ident {
            $enter_trait:ident::$enter:ident => $register_enter:ident,
            $leave_trait:ident::$leave:ident => $register_leave:ident $(,)?
        }
    )*) => {
        $(
            $(#[$doc])*
            ///
            /// Called before the node's children are walked.
            pub trait $enter_trait {
                fn $enter(&mut self, node_ref: Ref, context: &mut VisitContext<'_>) -> Instruction;
            }

            impl<V: $enter_trait + ?Sized> $enter_trait for Rc<RefCell<V>> {
                fn $enter(&mut self, node_ref: Ref, context: &mut VisitContext<'_>) -> Instruction {
                    self.borrow_mut().$enter(node_ref, context)
                }
            }

            $(#[$doc])*
            ///
            /// Called after the node's children were walked (or skipped).
            pub trait $leave_trait {
                fn $leave(&mut self, node_ref: Ref, context: &mut VisitContext<'_>) -> Instruction;
            }

            impl<V: $leave_trait + ?Sized> $leave_trait for Rc<RefCell<V>> {
                fn $leave(&mut self, node_ref: Ref, context: &mut VisitContext<'_>) -> Instruction {
                    self.borrow_mut().$leave(node_ref, context)
                }
            }
        )*

        /// The registered callbacks, one list per visitor trait, called in
        /// registration order.
        #[derive(Default)]
        pub(crate) struct Visitors<'v> {
            pub(crate) enter_document: Vec<Box<dyn EnterDocumentVisitor + 'v>>,
            pub(crate) leave_document: Vec<Box<dyn LeaveDocumentVisitor + 'v>>,
            $(
                $enter: Vec<Box<dyn $enter_trait + 'v>>,
                $leave: Vec<Box<dyn $leave_trait + 'v>>,
            )*
        }

        impl Visitors<'_> {
            pub(crate) fn enter(&mut self, node: Node, context: &mut VisitContext<'_>) -> Instruction {
                match node.kind {
                    $(
                        NodeKind::$kind => combine(
                            self.$enter
                                .iter_mut()
                                .map(|visitor| visitor.$enter(node.node_ref, context)),
                        ),
                    )*
                    _ => Instruction::Continue,
                }
            }

            pub(crate) fn leave(&mut self, node: Node, context: &mut VisitContext<'_>) -> Instruction {
                match node.kind {
                    $(
                        NodeKind::$kind => combine(
                            self.$leave
                                .iter_mut()
                                .map(|visitor| visitor.$leave(node.node_ref, context)),
                        ),
                    )*
                    _ => Instruction::Continue,
                }
            }
        }

        impl<'v> Walker<'v> {
            $(
                pub fn $register_enter(&mut self, visitor: Box<dyn $enter_trait + 'v>) {
                    self.visitors.$enter.push(visitor);
                }

                pub fn $register_leave(&mut self, visitor: Box<dyn $leave_trait + 'v>) {
                    self.visitors.$leave.push(visitor);
                }
            )*
        }
    };
}

/// Folds the instructions of several callbacks for one node: the first
/// `Stop`/`StopWithError` wins (remaining callbacks don't run), otherwise any
/// `SkipNode` skips the children.
pub(crate) fn combine(instructions: impl Iterator<Item = Instruction>) -> Instruction {
    let mut skip = false;
    for instruction in instructions {
        match instruction {
            Instruction::Continue => (),
            Instruction::SkipNode => skip = true,
            stop @ (Instruction::Stop | Instruction::StopWithError(_)) => return stop,
        }
    }
    if skip {
        Instruction::SkipNode
    } else {
        Instruction::Continue
    }
}

/// Called once before any root node is walked. Returning
/// [`Instruction::SkipNode`] skips the whole document.
pub trait EnterDocumentVisitor {
    fn enter_document(&mut self, context: &mut VisitContext<'_>) -> Instruction;
}

impl<V: EnterDocumentVisitor + ?Sized> EnterDocumentVisitor for Rc<RefCell<V>> {
    fn enter_document(&mut self, context: &mut VisitContext<'_>) -> Instruction {
        self.borrow_mut().enter_document(context)
    }
}

/// Called once after every root node was walked.
pub trait LeaveDocumentVisitor {
    fn leave_document(&mut self, context: &mut VisitContext<'_>) -> Instruction;
}

impl<V: LeaveDocumentVisitor + ?Sized> LeaveDocumentVisitor for Rc<RefCell<V>> {
    fn leave_document(&mut self, context: &mut VisitContext<'_>) -> Instruction {
        self.borrow_mut().leave_document(context)
    }
}

/// Both document callbacks.
pub trait DocumentVisitor: EnterDocumentVisitor + LeaveDocumentVisitor {}

impl<V: EnterDocumentVisitor + LeaveDocumentVisitor + ?Sized> DocumentVisitor for V {}

impl<'v> Walker<'v> {
    pub fn register_enter_document_visitor(&mut self, visitor: Box<dyn EnterDocumentVisitor + 'v>) {
        self.visitors.enter_document.push(visitor);
    }

    pub fn register_leave_document_visitor(&mut self, visitor: Box<dyn LeaveDocumentVisitor + 'v>) {
        self.visitors.leave_document.push(visitor);
    }

    /// Registers one shared visitor for both document callbacks.
    pub fn register_document_visitor<V: DocumentVisitor + 'v>(&mut self, visitor: Rc<RefCell<V>>) {
        self.visitors.enter_document.push(Box::new(Rc::clone(&visitor)));
        self.visitors.leave_document.push(Box::new(visitor));
    }
}

node_visitors! {
    /// `query`, `mutation`, `subscription` or `{ ... }`.
    OperationDefinition {
        EnterOperationDefinitionVisitor::enter_operation_definition
            => register_enter_operation_definition_visitor,
        LeaveOperationDefinitionVisitor::leave_operation_definition
            => register_leave_operation_definition_visitor,
    }
    /// `$name: Type = default`.
    VariableDefinition {
        EnterVariableDefinitionVisitor::enter_variable_definition
            => register_enter_variable_definition_visitor,
        LeaveVariableDefinitionVisitor::leave_variable_definition
            => register_leave_variable_definition_visitor,
    }
    /// `{ ... }` of an operation, fragment, inline fragment or field.
    SelectionSet {
        EnterSelectionSetVisitor::enter_selection_set
            => register_enter_selection_set_visitor,
        LeaveSelectionSetVisitor::leave_selection_set
            => register_leave_selection_set_visitor,
    }
    /// A field selection.
    Field {
        EnterFieldVisitor::enter_field => register_enter_field_visitor,
        LeaveFieldVisitor::leave_field => register_leave_field_visitor,
    }
    /// A field or directive argument.
    Argument {
        EnterArgumentVisitor::enter_argument => register_enter_argument_visitor,
        LeaveArgumentVisitor::leave_argument => register_leave_argument_visitor,
    }
    /// `...FragmentName`.
    FragmentSpread {
        EnterFragmentSpreadVisitor::enter_fragment_spread
            => register_enter_fragment_spread_visitor,
        LeaveFragmentSpreadVisitor::leave_fragment_spread
            => register_leave_fragment_spread_visitor,
    }
    /// `... on Type { ... }`.
    InlineFragment {
        EnterInlineFragmentVisitor::enter_inline_fragment
            => register_enter_inline_fragment_visitor,
        LeaveInlineFragmentVisitor::leave_inline_fragment
            => register_leave_inline_fragment_visitor,
    }
    /// `fragment Name on Type { ... }`.
    FragmentDefinition {
        EnterFragmentDefinitionVisitor::enter_fragment_definition
            => register_enter_fragment_definition_visitor,
        LeaveFragmentDefinitionVisitor::leave_fragment_definition
            => register_leave_fragment_definition_visitor,
    }
    /// An applied `@directive`.
    Directive {
        EnterDirectiveVisitor::enter_directive => register_enter_directive_visitor,
        LeaveDirectiveVisitor::leave_directive => register_leave_directive_visitor,
    }
    SchemaDefinition {
        EnterSchemaDefinitionVisitor::enter_schema_definition
            => register_enter_schema_definition_visitor,
        LeaveSchemaDefinitionVisitor::leave_schema_definition
            => register_leave_schema_definition_visitor,
    }
    SchemaExtension {
        EnterSchemaExtensionVisitor::enter_schema_extension
            => register_enter_schema_extension_visitor,
        LeaveSchemaExtensionVisitor::leave_schema_extension
            => register_leave_schema_extension_visitor,
    }
    /// `query: Query` inside a schema definition or extension.
    RootOperationTypeDefinition {
        EnterRootOperationTypeDefinitionVisitor::enter_root_operation_type_definition
            => register_enter_root_operation_type_definition_visitor,
        LeaveRootOperationTypeDefinitionVisitor::leave_root_operation_type_definition
            => register_leave_root_operation_type_definition_visitor,
    }
    ObjectTypeDefinition {
        EnterObjectTypeDefinitionVisitor::enter_object_type_definition
            => register_enter_object_type_definition_visitor,
        LeaveObjectTypeDefinitionVisitor::leave_object_type_definition
            => register_leave_object_type_definition_visitor,
    }
    ObjectTypeExtension {
        EnterObjectTypeExtensionVisitor::enter_object_type_extension
            => register_enter_object_type_extension_visitor,
        LeaveObjectTypeExtensionVisitor::leave_object_type_extension
            => register_leave_object_type_extension_visitor,
    }
    InterfaceTypeDefinition {
        EnterInterfaceTypeDefinitionVisitor::enter_interface_type_definition
            => register_enter_interface_type_definition_visitor,
        LeaveInterfaceTypeDefinitionVisitor::leave_interface_type_definition
            => register_leave_interface_type_definition_visitor,
    }
    InterfaceTypeExtension {
        EnterInterfaceTypeExtensionVisitor::enter_interface_type_extension
            => register_enter_interface_type_extension_visitor,
        LeaveInterfaceTypeExtensionVisitor::leave_interface_type_extension
            => register_leave_interface_type_extension_visitor,
    }
    ScalarTypeDefinition {
        EnterScalarTypeDefinitionVisitor::enter_scalar_type_definition
            => register_enter_scalar_type_definition_visitor,
        LeaveScalarTypeDefinitionVisitor::leave_scalar_type_definition
            => register_leave_scalar_type_definition_visitor,
    }
    ScalarTypeExtension {
        EnterScalarTypeExtensionVisitor::enter_scalar_type_extension
            => register_enter_scalar_type_extension_visitor,
        LeaveScalarTypeExtensionVisitor::leave_scalar_type_extension
            => register_leave_scalar_type_extension_visitor,
    }
    UnionTypeDefinition {
        EnterUnionTypeDefinitionVisitor::enter_union_type_definition
            => register_enter_union_type_definition_visitor,
        LeaveUnionTypeDefinitionVisitor::leave_union_type_definition
            => register_leave_union_type_definition_visitor,
    }
    UnionTypeExtension {
        EnterUnionTypeExtensionVisitor::enter_union_type_extension
            => register_enter_union_type_extension_visitor,
        LeaveUnionTypeExtensionVisitor::leave_union_type_extension
            => register_leave_union_type_extension_visitor,
    }
    /// A member of `union U = A | B`. The ref points into `types`.
    UnionMemberType {
        EnterUnionMemberTypeVisitor::enter_union_member_type
            => register_enter_union_member_type_visitor,
        LeaveUnionMemberTypeVisitor::leave_union_member_type
            => register_leave_union_member_type_visitor,
    }
    EnumTypeDefinition {
        EnterEnumTypeDefinitionVisitor::enter_enum_type_definition
            => register_enter_enum_type_definition_visitor,
        LeaveEnumTypeDefinitionVisitor::leave_enum_type_definition
            => register_leave_enum_type_definition_visitor,
    }
    EnumTypeExtension {
        EnterEnumTypeExtensionVisitor::enter_enum_type_extension
            => register_enter_enum_type_extension_visitor,
        LeaveEnumTypeExtensionVisitor::leave_enum_type_extension
            => register_leave_enum_type_extension_visitor,
    }
    EnumValueDefinition {
        EnterEnumValueDefinitionVisitor::enter_enum_value_definition
            => register_enter_enum_value_definition_visitor,
        LeaveEnumValueDefinitionVisitor::leave_enum_value_definition
            => register_leave_enum_value_definition_visitor,
    }
    InputObjectTypeDefinition {
        EnterInputObjectTypeDefinitionVisitor::enter_input_object_type_definition
            => register_enter_input_object_type_definition_visitor,
        LeaveInputObjectTypeDefinitionVisitor::leave_input_object_type_definition
            => register_leave_input_object_type_definition_visitor,
    }
    InputObjectTypeExtension {
        EnterInputObjectTypeExtensionVisitor::enter_input_object_type_extension
            => register_enter_input_object_type_extension_visitor,
        LeaveInputObjectTypeExtensionVisitor::leave_input_object_type_extension
            => register_leave_input_object_type_extension_visitor,
    }
    DirectiveDefinition {
        EnterDirectiveDefinitionVisitor::enter_directive_definition
            => register_enter_directive_definition_visitor,
        LeaveDirectiveDefinitionVisitor::leave_directive_definition
            => register_leave_directive_definition_visitor,
    }
    /// A field of an object or interface type definition or extension.
    FieldDefinition {
        EnterFieldDefinitionVisitor::enter_field_definition
            => register_enter_field_definition_visitor,
        LeaveFieldDefinitionVisitor::leave_field_definition
            => register_leave_field_definition_visitor,
    }
    /// An argument definition or input object field.
    InputValueDefinition {
        EnterInputValueDefinitionVisitor::enter_input_value_definition
            => register_enter_input_value_definition_visitor,
        LeaveInputValueDefinitionVisitor::leave_input_value_definition
            => register_leave_input_value_definition_visitor,
    }
}
