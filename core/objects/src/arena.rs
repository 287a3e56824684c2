use std::{
    fmt::{self, Display, Formatter},
    ops::Deref,
};

use rustc_hash::FxHashMap;

use crate::nodes::{AnyObject, ObjectKind, Project};

/// Handle of an object stored in an [`Arena`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct ObjectId(usize);

impl ObjectId {
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

impl Display for ObjectId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A borrowed object together with its arena handle.
pub struct Node<'a, T> {
    pub id: ObjectId,
    pub object: &'a T,
}

impl<T> Clone for Node<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Node<'_, T> {}

impl<T> Deref for Node<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        self.object
    }
}

impl<T: fmt::Debug> fmt::Debug for Node<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("id", &self.id)
            .field("object", self.object)
            .finish()
    }
}

/// Flat storage of resolved objects and the links between them.
///
/// Objects are stored in attachment order. Containers own their children
/// through the child lists in [`NodeRoute`]; parent and project links are
/// plain handles, so there is no ownership cycle between a node and its
/// parent.
#[derive(Default, Clone, Debug)]
pub struct Arena {
    pub(crate) nodes: Vec<AnyObject>,
    pub(crate) node_routes: Vec<NodeRoute>,
    keys: FxHashMap<String, ObjectId>,
    project: Option<ObjectId>,
}

impl Arena {
    /// Stores the project root. Every node added afterwards points back to it.
    ///
    /// # Panics
    ///
    /// Panics if the arena already holds a project.
    pub fn add_project(&mut self, project: Project) -> ObjectId {
        assert!(self.project.is_none(), "Arena already holds a project");
        let id = self.push(project.into(), None, None);
        self.project = Some(id);
        id
    }

    /// Adds a node and records its parent-child relationship.
    ///
    /// `parent` is `None` only for the main group. The project link is taken
    /// from the arena and set here, once.
    ///
    /// # Panics
    ///
    /// Panics if `parent` does not belong to this arena.
    pub fn add_node(&mut self, node: AnyObject, parent: Option<ObjectId>) -> ObjectId {
        if let Some(parent_id) = parent {
            assert!(
                parent_id.index() < self.nodes.len(),
                "Parent {parent_id} does not exist in the arena"
            );
        }
        let project = self.project;
        self.push(node, parent, project)
    }

    fn push(
        &mut self,
        node: AnyObject,
        parent: Option<ObjectId>,
        project: Option<ObjectId>,
    ) -> ObjectId {
        let id = ObjectId(self.nodes.len());
        self.keys.entry(node.key().to_owned()).or_insert(id);
        self.nodes.push(node);
        if let Some(parent_id) = parent {
            self.node_routes[parent_id.index()].children.push(id);
        }
        self.node_routes.push(NodeRoute {
            id,
            parent,
            project,
            children: vec![],
        });
        id
    }

    #[must_use]
    pub fn find_node(&self, id: ObjectId) -> Option<&AnyObject> {
        self.nodes.get(id.index())
    }

    #[must_use]
    pub fn find_parent_node(&self, id: ObjectId) -> Option<ObjectId> {
        self.node_routes.get(id.index()).and_then(|route| route.parent)
    }

    #[must_use]
    pub fn find_project_node(&self, id: ObjectId) -> Option<ObjectId> {
        self.node_routes
            .get(id.index())
            .and_then(|route| route.project)
    }

    /// Handles of the children attached under `id`, in declared order.
    #[must_use]
    pub fn children(&self, id: ObjectId) -> &[ObjectId] {
        self.node_routes
            .get(id.index())
            .map_or(&[], |route| route.children.as_slice())
    }

    /// Handle of the node attached for `key`, if any.
    #[must_use]
    pub fn find_by_key(&self, key: &str) -> Option<ObjectId> {
        self.keys.get(key).copied()
    }

    #[must_use]
    pub fn project(&self) -> Option<Node<'_, Project>> {
        let id = self.project?;
        self.get::<Project>(id)
    }

    /// Typed access to one node; `None` if the handle is unknown or the node
    /// is of another kind.
    #[must_use]
    pub fn get<T: ObjectKind>(&self, id: ObjectId) -> Option<Node<'_, T>> {
        let object = T::downcast(self.find_node(id)?)?;
        Some(Node { id, object })
    }

    /// All nodes except the project root, in attachment order.
    pub fn objects(&self) -> impl Iterator<Item = Node<'_, AnyObject>> + '_ {
        let project = self.project;
        self.node_routes
            .iter()
            .filter(move |route| Some(route.id) != project)
            .map(move |route| Node {
                id: route.id,
                object: &self.nodes[route.id.index()],
            })
    }

    /// Every node of kind `T`, in attachment order.
    #[must_use]
    pub fn objects_of<T: ObjectKind>(&self) -> Vec<Node<'_, T>> {
        self.list_nodes_cmp(|node| T::downcast(node)).collect()
    }

    pub fn filter_nodes<F: Fn(&AnyObject) -> bool>(
        &self,
        fn_predicate: F,
    ) -> Vec<Node<'_, AnyObject>> {
        self.objects()
            .filter(|node| fn_predicate(node.object))
            .collect()
    }

    /// Number of nodes, not counting the project root.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len() - usize::from(self.project.is_some())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn list_nodes_cmp<'a, T, F>(&'a self, cmp: F) -> impl Iterator<Item = Node<'a, T>> + 'a
    where
        F: Fn(&'a AnyObject) -> Option<&'a T> + 'a,
        T: 'a,
    {
        self.objects().filter_map(move |node| {
            cmp(node.object).map(|object| Node {
                id: node.id,
                object,
            })
        })
    }
}

#[derive(Clone, Debug)]
pub struct NodeRoute {
    pub id: ObjectId,
    parent: Option<ObjectId>,
    project: Option<ObjectId>,
    children: Vec<ObjectId>,
}
