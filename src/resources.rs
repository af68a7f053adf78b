use std::any::Any;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Named resources handed to plugins by the host.
///
/// The map is opaque to plugins: they forward it and, at most, check which
/// names are present. Cloning shares the underlying resource objects.
#[derive(Clone, Default)]
pub struct Resources {
    entries: HashMap<String, Arc<dyn Any + Send + Sync>>,
}

impl Resources {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert<T: Any + Send + Sync>(&mut self, name: impl Into<String>, resource: T) {
        self.entries.insert(name.into(), Arc::new(resource));
    }

    pub fn insert_arc(&mut self, name: impl Into<String>, resource: Arc<dyn Any + Send + Sync>) {
        self.entries.insert(name.into(), resource);
    }

    /// Look up a resource and downcast it to `T`.
    pub fn get<T: Any + Send + Sync>(&self, name: &str) -> Option<Arc<T>> {
        self.entries
            .get(name)
            .cloned()
            .and_then(|resource| resource.downcast::<T>().ok())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Resource names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for Resources {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Resources")
            .field("names", &self.names())
            .finish()
    }
}
