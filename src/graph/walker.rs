//! Role and cookbook traversal that materializes the dependency graph.

use std::collections::HashMap;
use std::path::PathBuf;

use walkdir::WalkDir;

use crate::chef::{Role, cookbook};
use crate::constants::roles;
use crate::error::EggbeaterError;
use crate::graph::{Adjacency, TreeNode};

/// Walks a role's run list depth-first, resolving nested roles and cookbook
/// dependencies into an adjacency mapping, and building the display tree in
/// the same pass.
///
/// A cookbook vertex is inserted into the mapping *before* its dependencies
/// are expanded; hitting an already-present vertex stops the recursion,
/// which is what terminates dependency cycles.
pub struct GraphWalker {
    cookbook_paths: Vec<PathBuf>,
    roles_dir: PathBuf,
    roles_index: HashMap<String, Role>,
    role_files: HashMap<String, PathBuf>,
    graph: Adjacency,
}

impl GraphWalker {
    pub fn new(cookbook_paths: Vec<PathBuf>, roles_dir: PathBuf) -> Self {
        Self {
            cookbook_paths,
            roles_dir,
            roles_index: HashMap::new(),
            role_files: HashMap::new(),
            graph: Adjacency::new(),
        }
    }

    /// Expands the named role's run list into the graph, attaching the
    /// traversal to `tree` for display.
    pub fn walk_role(&mut self, name: &str, tree: &mut TreeNode) -> Result<(), EggbeaterError> {
        if self.roles_index.is_empty() {
            self.load_roles()?;
        }

        let role = self
            .roles_index
            .get(name)
            .cloned()
            .ok_or_else(|| EggbeaterError::RoleNotFound {
                role: name.to_string(),
            })?;

        for entry in &role.run_list {
            if let Some(nested) = entry
                .strip_prefix("role[")
                .and_then(|rest| rest.strip_suffix(']'))
            {
                let branch = tree.add_child(format!("{nested}.json"));
                self.walk_role(nested, branch)?;
            } else if let Some(recipe) = entry
                .strip_prefix("recipe[")
                .and_then(|rest| rest.strip_suffix(']'))
            {
                // only the cookbook prefix of cookbook::recipe matters
                let cookbook = recipe.split("::").next().unwrap_or(recipe);
                let branch = tree.add_child(cookbook);
                self.expand_cookbook(cookbook, branch)?;
            } else {
                return Err(EggbeaterError::InvalidRunListEntry {
                    role: role.name.clone(),
                    entry: entry.clone(),
                });
            }
        }

        Ok(())
    }

    /// Preloads every role in the roles directory so roles can be looked up
    /// by their internal name. The scan is non-recursive and only considers
    /// `.json` files.
    fn load_roles(&mut self) -> Result<(), EggbeaterError> {
        for entry in WalkDir::new(&self.roles_dir).min_depth(1).max_depth(1) {
            let entry = entry.map_err(|e| EggbeaterError::Io(e.into()))?;
            if !entry.file_type().is_file() {
                continue;
            }

            let path = entry.path();
            if path.extension().is_none_or(|ext| ext != roles::FILE_EXTENSION) {
                continue;
            }

            let role = Role::from_file(path)?;
            if let Some(previous) = self.role_files.get(&role.name) {
                return Err(EggbeaterError::DuplicateRole {
                    role: role.name,
                    path: path.to_path_buf(),
                    previous: previous.clone(),
                });
            }

            self.role_files.insert(role.name.clone(), path.to_path_buf());
            self.roles_index.insert(role.name.clone(), role);
        }

        Ok(())
    }

    /// Expands one cookbook's dependencies into the graph, depth-first.
    fn expand_cookbook(&mut self, name: &str, tree: &mut TreeNode) -> Result<(), EggbeaterError> {
        if self.graph.contains_key(name) {
            return Ok(());
        }

        // Insert the vertex up front so a dependency cycle back to it finds
        // it and stops, and so leaf cookbooks still appear in the mapping.
        self.graph.insert(name.to_string(), Vec::new());

        let dependencies = cookbook::load_dependencies(name, &self.cookbook_paths)?;
        for dependency in dependencies {
            if let Some(edges) = self.graph.get_mut(name) {
                edges.push(dependency.clone());
            }

            if !self.graph.contains_key(&dependency) {
                let branch = tree.add_child(&dependency);
                self.expand_cookbook(&dependency, branch)?;
            }
        }

        Ok(())
    }

    pub fn graph(&self) -> &Adjacency {
        &self.graph
    }

    pub fn into_graph(self) -> Adjacency {
        self.graph
    }
}
