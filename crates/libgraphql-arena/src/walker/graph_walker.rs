use crate::ExternalError;
use crate::PathItem;
use crate::Position;
use crate::Report;
use crate::ast::DelimitedList;
use crate::ast::DirectiveList;
use crate::ast::Document;
use crate::ast::Node;
use crate::ast::NodeKind;
use crate::ast::Ref;
use crate::ast::RefList;
use crate::walker::Instruction;
use crate::walker::VisitContext;
use crate::walker::WalkerState;
use crate::walker::visitors::Visitors;
use crate::walker::visitors::combine;
use std::ops::ControlFlow;

const TYPENAME_FIELD: &[u8] = b"__typename";

/// A depth-first walker over a [`Document`] that calls the registered
/// visitors on entering and leaving every node.
///
/// When walked with a schema document the walker also tracks the enclosing
/// type of every selection and resolves each field's definition before its
/// callbacks run. A field the schema doesn't define, or an operation whose
/// root type the schema lacks, ends the walk with an [`ExternalError`].
///
/// ```rust
/// use libgraphql_arena::Report;
/// use libgraphql_arena::ast::Ref;
/// use libgraphql_arena::parse_graphql_document_string;
/// use libgraphql_arena::walker::EnterFieldVisitor;
/// use libgraphql_arena::walker::Instruction;
/// use libgraphql_arena::walker::VisitContext;
/// use libgraphql_arena::walker::Walker;
/// use std::cell::RefCell;
/// use std::rc::Rc;
///
/// #[derive(Default)]
/// struct FieldNames(Vec<String>);
///
/// impl EnterFieldVisitor for FieldNames {
///     fn enter_field(&mut self, field: Ref, context: &mut VisitContext<'_>) -> Instruction {
///         self.0.push(context.operation.field_name_string(field));
///         Instruction::Continue
///     }
/// }
///
/// let (operation, _) = parse_graphql_document_string("{ user { name } }");
/// let names = Rc::new(RefCell::new(FieldNames::default()));
/// let mut walker = Walker::new();
/// walker.register_enter_field_visitor(Box::new(Rc::clone(&names)));
///
/// let mut report = Report::new();
/// walker.walk(&operation, None, &mut report);
/// assert_eq!(names.borrow().0, ["user", "name"]);
/// ```
#[derive(Default)]
pub struct Walker<'v> {
    pub(crate) visitors: Visitors<'v>,
    state: WalkerState,
    buffers: WalkBuffers,
}

/// Per-walk stacks, kept on the walker so their capacity is reused.
#[derive(Default)]
struct WalkBuffers {
    ancestors: Vec<Node>,
    path: Vec<PathItem>,
    /// Enclosing type definitions, each with whether it lives in the schema
    /// document (`true`) or in the walked document.
    type_definitions: Vec<(Node, bool)>,
}

impl<'v> Walker<'v> {
    pub fn new() -> Self {
        Self::default()
    }

    /// The state of the most recent walk.
    pub fn state(&self) -> WalkerState {
        self.state
    }

    /// Walks every root node of `operation`, in source order.
    ///
    /// `definition` is the schema to resolve fields and enclosing types
    /// against; without it no type tracking happens. Errors from visitors
    /// and from type resolution are added to `report`.
    pub fn walk(
        &mut self,
        operation: &Document,
        definition: Option<&Document>,
        report: &mut Report,
    ) {
        self.buffers.ancestors.clear();
        self.buffers.path.clear();
        self.buffers.type_definitions.clear();
        self.state = WalkerState::InProgress;
        log::trace!(
            "walking document with {} root nodes (schema: {})",
            operation.root_nodes.len(),
            definition.is_some(),
        );

        let mut walk = Walk {
            visitors: &mut self.visitors,
            buffers: &mut self.buffers,
            operation,
            definition,
            report,
            field_definition: None,
        };
        self.state = match walk.walk_document() {
            ControlFlow::Continue(()) => WalkerState::Completed,
            ControlFlow::Break(()) => {
                log::debug!("walk aborted");
                WalkerState::Aborted
            },
        };
        log::trace!("walk finished: {:?}", self.state);
    }
}

/// One walk in progress.
struct Walk<'a, 'v> {
    visitors: &'a mut Visitors<'v>,
    buffers: &'a mut WalkBuffers,
    operation: &'a Document,
    definition: Option<&'a Document>,
    report: &'a mut Report,
    /// The resolved definition of the field currently being entered or left.
    field_definition: Option<Ref>,
}

type Flow = ControlFlow<()>;

impl Walk<'_, '_> {
    // =========================================================================
    // Callback dispatch
    // =========================================================================

    fn enter(&mut self, node: Node) -> ControlFlow<(), bool> {
        let mut context = visit_context(
            self.buffers,
            self.operation,
            self.definition,
            self.field_definition,
            self.report,
        );
        let instruction = self.visitors.enter(node, &mut context);
        apply(self.report, instruction)
    }

    fn leave(&mut self, node: Node) -> Flow {
        let mut context = visit_context(
            self.buffers,
            self.operation,
            self.definition,
            self.field_definition,
            self.report,
        );
        let instruction = self.visitors.leave(node, &mut context);
        apply(self.report, instruction)?;
        ControlFlow::Continue(())
    }

    /// Enters `node`, walks its children with `node` pushed as an ancestor
    /// unless a visitor skipped it, then leaves it.
    fn visit(&mut self, node: Node, children: fn(&mut Self, Ref) -> Flow) -> Flow {
        if self.enter(node)? {
            self.buffers.ancestors.push(node);
            children(self, node.node_ref)?;
            self.buffers.ancestors.pop();
        }
        self.leave(node)
    }

    fn leaf(_: &mut Self, _: Ref) -> Flow {
        ControlFlow::Continue(())
    }

    /// Records an error found by the walker itself and stops.
    fn stop_with_error(&mut self, error: ExternalError) -> Flow {
        self.report.add_external_error(error);
        ControlFlow::Break(())
    }

    // =========================================================================
    // Document
    // =========================================================================

    fn walk_document(&mut self) -> Flow {
        let document = self.operation;
        let mut context = visit_context(
            self.buffers,
            document,
            self.definition,
            None,
            self.report,
        );
        let instruction = combine(
            self.visitors
                .enter_document
                .iter_mut()
                .map(|visitor| visitor.enter_document(&mut context)),
        );

        if apply(self.report, instruction)? {
            for node in document.root_nodes.iter().copied() {
                self.walk_node(node)?;
            }
        }

        let mut context = visit_context(
            self.buffers,
            self.operation,
            self.definition,
            None,
            self.report,
        );
        let instruction = combine(
            self.visitors
                .leave_document
                .iter_mut()
                .map(|visitor| visitor.leave_document(&mut context)),
        );
        apply(self.report, instruction)?;
        ControlFlow::Continue(())
    }

    fn walk_node(&mut self, node: Node) -> Flow {
        match node.kind {
            NodeKind::OperationDefinition => self.walk_operation_definition(node.node_ref),
            NodeKind::FragmentDefinition => self.walk_fragment_definition(node.node_ref),
            NodeKind::SchemaDefinition => self.visit(node, Self::schema_definition_children),
            NodeKind::SchemaExtension => self.visit(node, Self::schema_extension_children),
            NodeKind::DirectiveDefinition => {
                self.visit(node, Self::directive_definition_children)
            },
            kind if kind.is_type_definition_or_extension() => {
                self.walk_type_system_definition(node)
            },
            _ => self.visit(node, Self::leaf),
        }
    }

    // =========================================================================
    // Executable definitions
    // =========================================================================

    fn walk_operation_definition(&mut self, operation: Ref) -> Flow {
        let node = Node::new(NodeKind::OperationDefinition, operation);
        let document = self.operation;
        let root_type = match self.definition {
            Some(definition) => {
                let operation_definition = &document.operation_definitions[operation as usize];
                let operation_type = operation_definition.operation_type;
                match definition.root_operation_type_definition(operation_type) {
                    Some(root_type) => Some(root_type),
                    None => {
                        return self.stop_with_error(ExternalError::operation_root_type_undefined(
                            operation_type.as_str(),
                            operation_definition.position,
                        ));
                    },
                }
            },
            None => None,
        };

        if let Some(root_type) = root_type {
            self.buffers.type_definitions.push((root_type, true));
        }
        self.visit(node, |walk, operation| {
            let operation = walk.operation.operation_definitions[operation as usize];
            walk.walk_variable_definitions(operation.variable_definitions)?;
            walk.walk_directives(operation.directives)?;
            walk.walk_selection_set(operation.selection_set)
        })?;
        if root_type.is_some() {
            self.buffers.type_definitions.pop();
        }
        ControlFlow::Continue(())
    }

    fn walk_variable_definitions(&mut self, variable_definitions: DelimitedList) -> Flow {
        let document = self.operation;
        for variable_definition in variable_definitions
            .refs
            .iter(&document.variable_definitions)
        {
            let node = Node::new(NodeKind::VariableDefinition, variable_definition);
            self.visit(node, |walk, variable_definition| {
                let directives =
                    walk.operation.variable_definitions[variable_definition as usize].directives;
                walk.walk_directives(directives)
            })?;
        }
        ControlFlow::Continue(())
    }

    fn walk_fragment_definition(&mut self, fragment: Ref) -> Flow {
        let node = Node::new(NodeKind::FragmentDefinition, fragment);
        let fragment_definition = self.operation.fragment_definitions[fragment as usize];
        let pushed = self.push_type_condition(
            fragment_definition.type_condition.named_type,
            fragment_definition.position,
        )?;
        self.visit(node, |walk, fragment| {
            let fragment = walk.operation.fragment_definitions[fragment as usize];
            walk.walk_directives(fragment.directives)?;
            walk.walk_selection_set(fragment.selection_set)
        })?;
        if pushed {
            self.buffers.type_definitions.pop();
        }
        ControlFlow::Continue(())
    }

    /// Resolves a type condition against the schema and makes it the
    /// enclosing type. Returns whether a type was pushed.
    fn push_type_condition(
        &mut self,
        named_type: Ref,
        position: Position,
    ) -> ControlFlow<(), bool> {
        let Some(definition) = self.definition else {
            return ControlFlow::Continue(false);
        };
        let document = self.operation;
        match definition.index_node(document.type_name_bytes(named_type)) {
            Some(type_node) => {
                self.buffers.type_definitions.push((type_node, true));
                ControlFlow::Continue(true)
            },
            None => {
                let type_name = document.type_name_string(named_type);
                let error = ExternalError::type_undefined(&type_name, position)
                    .with_path(self.buffers.path.clone());
                self.report.add_external_error(error);
                ControlFlow::Break(())
            },
        }
    }

    fn walk_selection_set(&mut self, selection_set: Ref) -> Flow {
        let node = Node::new(NodeKind::SelectionSet, selection_set);
        self.visit(node, |walk, selection_set| {
            let document = walk.operation;
            let selections = document.selection_sets[selection_set as usize].selections;
            for selection in selections.iter(&document.selections) {
                let selection_node = document.selection_node(selection);
                match selection_node.kind {
                    NodeKind::Field => walk.walk_field(selection_node.node_ref)?,
                    NodeKind::InlineFragment => {
                        walk.walk_inline_fragment(selection_node.node_ref)?;
                    },
                    _ => walk.walk_fragment_spread(selection_node.node_ref)?,
                }
            }
            ControlFlow::Continue(())
        })
    }

    fn walk_field(&mut self, field: Ref) -> Flow {
        let node = Node::new(NodeKind::Field, field);
        let document = self.operation;
        let field_node = document.fields[field as usize];
        let field_name = document.field_name_bytes(field);

        // Resolve the field against the enclosing schema type.
        let mut field_definition = None;
        let mut field_type = None;
        let enclosing = self.buffers.type_definitions.last().copied();
        if let (Some(definition), Some((enclosing_type, true))) = (self.definition, enclosing) {
            if field_name != TYPENAME_FIELD {
                let Some(found) = definition.node_field_definition_by_name(enclosing_type, field_name)
                else {
                    let error = ExternalError::field_undefined(
                        &document.field_name_string(field),
                        &definition.node_name_string(enclosing_type),
                        field_node.position,
                    )
                    .with_path(self.buffers.path.clone());
                    return self.stop_with_error(error);
                };
                field_definition = Some(found);
            }
            if let (Some(found), Some(_)) = (field_definition, field_node.selection_set) {
                let type_ref = definition.field_definition_type(found);
                let Some(type_node) = definition.index_node(definition.type_name_bytes(type_ref))
                else {
                    let error = ExternalError::type_undefined(
                        &definition.type_name_string(type_ref),
                        field_node.position,
                    )
                    .with_path(self.buffers.path.clone());
                    return self.stop_with_error(error);
                };
                field_type = Some(type_node);
            }
        }

        self.field_definition = field_definition;
        let descend = self.enter(node)?;
        self.field_definition = None;

        if descend {
            self.buffers.ancestors.push(node);
            self.walk_arguments(field_node.arguments)?;
            self.walk_directives(field_node.directives)?;
            if let Some(selection_set) = field_node.selection_set {
                let response_key = document.field_response_key_string(field);
                self.buffers.path.push(PathItem::FieldName(response_key));
                if let Some(field_type) = field_type {
                    self.buffers.type_definitions.push((field_type, true));
                }
                self.walk_selection_set(selection_set)?;
                if field_type.is_some() {
                    self.buffers.type_definitions.pop();
                }
                self.buffers.path.pop();
            }
            self.buffers.ancestors.pop();
        }

        self.field_definition = field_definition;
        let flow = self.leave(node);
        self.field_definition = None;
        flow
    }

    fn walk_inline_fragment(&mut self, inline_fragment: Ref) -> Flow {
        let node = Node::new(NodeKind::InlineFragment, inline_fragment);
        let fragment = self.operation.inline_fragments[inline_fragment as usize];
        let pushed = match fragment.type_condition {
            Some(type_condition) => {
                self.push_type_condition(type_condition.named_type, fragment.position)?
            },
            None => false,
        };
        let type_condition_name = fragment
            .type_condition
            .map(|type_condition| self.operation.type_name_string(type_condition.named_type));
        self.buffers.path.push(PathItem::InlineFragment(type_condition_name));
        self.visit(node, |walk, inline_fragment| {
            let fragment = walk.operation.inline_fragments[inline_fragment as usize];
            walk.walk_directives(fragment.directives)?;
            walk.walk_selection_set(fragment.selection_set)
        })?;
        self.buffers.path.pop();
        if pushed {
            self.buffers.type_definitions.pop();
        }
        ControlFlow::Continue(())
    }

    fn walk_fragment_spread(&mut self, fragment_spread: Ref) -> Flow {
        let node = Node::new(NodeKind::FragmentSpread, fragment_spread);
        self.visit(node, |walk, fragment_spread| {
            let directives = walk.operation.fragment_spreads[fragment_spread as usize].directives;
            walk.walk_directives(directives)
        })
    }

    fn walk_arguments(&mut self, arguments: DelimitedList) -> Flow {
        let document = self.operation;
        for argument in arguments.refs.iter(&document.arguments) {
            self.visit(Node::new(NodeKind::Argument, argument), Self::leaf)?;
        }
        ControlFlow::Continue(())
    }

    fn walk_directives(&mut self, directives: DirectiveList) -> Flow {
        let document = self.operation;
        for directive in directives.iter(&document.directives) {
            self.visit(Node::new(NodeKind::Directive, directive), |walk, directive| {
                let arguments = walk.operation.directives[directive as usize].arguments;
                walk.walk_arguments(arguments)
            })?;
        }
        ControlFlow::Continue(())
    }

    // =========================================================================
    // Type system definitions
    // =========================================================================

    fn schema_definition_children(&mut self, schema: Ref) -> Flow {
        let schema = self.operation.schema_definitions[schema as usize];
        self.walk_directives(schema.directives)?;
        self.walk_root_operation_types(schema.root_operation_types)
    }

    fn schema_extension_children(&mut self, schema: Ref) -> Flow {
        let schema = self.operation.schema_extensions[schema as usize].definition;
        self.walk_directives(schema.directives)?;
        self.walk_root_operation_types(schema.root_operation_types)
    }

    fn walk_root_operation_types(&mut self, root_operation_types: DelimitedList) -> Flow {
        let document = self.operation;
        for root in root_operation_types
            .refs
            .iter(&document.root_operation_type_definitions)
        {
            self.visit(Node::new(NodeKind::RootOperationTypeDefinition, root), Self::leaf)?;
        }
        ControlFlow::Continue(())
    }

    /// Walks a type definition or extension, which is the enclosing type of
    /// its own fields and values.
    fn walk_type_system_definition(&mut self, node: Node) -> Flow {
        self.buffers.type_definitions.push((node, false));
        if self.enter(node)? {
            self.buffers.ancestors.push(node);
            self.walk_type_system_definition_children(node)?;
            self.buffers.ancestors.pop();
        }
        self.leave(node)?;
        self.buffers.type_definitions.pop();
        ControlFlow::Continue(())
    }

    fn walk_type_system_definition_children(&mut self, node: Node) -> Flow {
        let document = self.operation;
        let r = node.node_ref as usize;
        match node.kind {
            NodeKind::ObjectTypeDefinition
            | NodeKind::ObjectTypeExtension
            | NodeKind::InterfaceTypeDefinition
            | NodeKind::InterfaceTypeExtension => {
                self.walk_directives(node_directives(document, node))?;
                self.walk_field_definitions(document.node_field_definitions(node))
            },
            NodeKind::ScalarTypeDefinition | NodeKind::ScalarTypeExtension => {
                self.walk_directives(node_directives(document, node))
            },
            NodeKind::UnionTypeDefinition => {
                let union = document.union_type_definitions[r];
                self.walk_directives(union.directives)?;
                self.walk_union_members(union.member_types)
            },
            NodeKind::UnionTypeExtension => {
                let union = document.union_type_extensions[r].definition;
                self.walk_directives(union.directives)?;
                self.walk_union_members(union.member_types)
            },
            NodeKind::EnumTypeDefinition => {
                let definition = document.enum_type_definitions[r];
                self.walk_directives(definition.directives)?;
                self.walk_enum_values(definition.values)
            },
            NodeKind::EnumTypeExtension => {
                let definition = document.enum_type_extensions[r].definition;
                self.walk_directives(definition.directives)?;
                self.walk_enum_values(definition.values)
            },
            NodeKind::InputObjectTypeDefinition => {
                let definition = document.input_object_type_definitions[r];
                self.walk_directives(definition.directives)?;
                self.walk_input_value_definitions(definition.fields)
            },
            NodeKind::InputObjectTypeExtension => {
                let definition = document.input_object_type_extensions[r].definition;
                self.walk_directives(definition.directives)?;
                self.walk_input_value_definitions(definition.fields)
            },
            _ => ControlFlow::Continue(()),
        }
    }

    fn walk_field_definitions(&mut self, fields: DelimitedList) -> Flow {
        let document = self.operation;
        for field in fields.refs.iter(&document.field_definitions) {
            self.visit(Node::new(NodeKind::FieldDefinition, field), |walk, field| {
                let field = walk.operation.field_definitions[field as usize];
                walk.walk_input_value_definitions(field.arguments)?;
                walk.walk_directives(field.directives)
            })?;
        }
        ControlFlow::Continue(())
    }

    fn walk_input_value_definitions(&mut self, input_values: DelimitedList) -> Flow {
        let document = self.operation;
        for input_value in input_values.refs.iter(&document.input_value_definitions) {
            let node = Node::new(NodeKind::InputValueDefinition, input_value);
            self.visit(node, |walk, input_value| {
                let directives =
                    walk.operation.input_value_definitions[input_value as usize].directives;
                walk.walk_directives(directives)
            })?;
        }
        ControlFlow::Continue(())
    }

    fn walk_union_members(&mut self, members: RefList) -> Flow {
        let document = self.operation;
        for member in members.iter(&document.types) {
            self.visit(Node::new(NodeKind::UnionMemberType, member), Self::leaf)?;
        }
        ControlFlow::Continue(())
    }

    fn walk_enum_values(&mut self, values: DelimitedList) -> Flow {
        let document = self.operation;
        for value in values.refs.iter(&document.enum_value_definitions) {
            let node = Node::new(NodeKind::EnumValueDefinition, value);
            self.visit(node, |walk, value| {
                let directives = walk.operation.enum_value_definitions[value as usize].directives;
                walk.walk_directives(directives)
            })?;
        }
        ControlFlow::Continue(())
    }

    fn directive_definition_children(&mut self, directive: Ref) -> Flow {
        let arguments = self.operation.directive_definitions[directive as usize].arguments;
        self.walk_input_value_definitions(arguments)
    }
}

/// Builds the context for one callback from the walk's disjoint parts.
fn visit_context<'c>(
    buffers: &'c WalkBuffers,
    operation: &'c Document,
    definition: Option<&'c Document>,
    field_definition: Option<Ref>,
    report: &'c mut Report,
) -> VisitContext<'c> {
    let enclosing = buffers.type_definitions.last().copied();
    let enclosing_type_name = enclosing.map(|(node, in_definition)| {
        let document = match (in_definition, definition) {
            (true, Some(definition)) => definition,
            _ => operation,
        };
        document.node_name_bytes(node)
    });
    VisitContext {
        operation,
        definition,
        ancestors: &buffers.ancestors,
        path: &buffers.path,
        enclosing_type_definition: enclosing.map(|(node, _)| node),
        enclosing_type_name,
        field_definition,
        report,
    }
}

/// Records a `StopWithError` and turns stops into a break. `Continue(false)`
/// means the node's children are skipped.
fn apply(report: &mut Report, instruction: Instruction) -> ControlFlow<(), bool> {
    match instruction {
        Instruction::Continue => ControlFlow::Continue(true),
        Instruction::SkipNode => ControlFlow::Continue(false),
        Instruction::Stop => ControlFlow::Break(()),
        Instruction::StopWithError(error) => {
            report.add_error(error);
            ControlFlow::Break(())
        },
    }
}

/// The directives applied to a type definition or extension.
fn node_directives(document: &Document, node: Node) -> DirectiveList {
    let r = node.node_ref as usize;
    match node.kind {
        NodeKind::ObjectTypeDefinition => document.object_type_definitions[r].directives,
        NodeKind::ObjectTypeExtension => document.object_type_extensions[r].definition.directives,
        NodeKind::InterfaceTypeDefinition => document.interface_type_definitions[r].directives,
        NodeKind::InterfaceTypeExtension => {
            document.interface_type_extensions[r].definition.directives
        },
        NodeKind::ScalarTypeDefinition => document.scalar_type_definitions[r].directives,
        NodeKind::ScalarTypeExtension => document.scalar_type_extensions[r].definition.directives,
        _ => DirectiveList::default(),
    }
}
