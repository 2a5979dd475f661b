use crate::common::*;

/// A named object class.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClassEntry {
    pub id: i32,
    pub name: String,
}

/// The ordered class list of a dataset, stored as a JSON array of
/// `{"id": .., "name": ..}` objects.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClassRegistry {
    classes: Vec<ClassEntry>,
}

impl ClassRegistry {
    /// Load the class list. A missing file gives an empty list.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            info!(
                "no class file at '{}', start with an empty class list",
                path.display()
            );
            return Ok(Self::default());
        }

        let text = fs::read_to_string(path)
            .with_context(|| format!("unable to read '{}'", path.display()))?;
        let registry: Self = serde_json::from_str(&text).with_context(|| {
            format!(
                "'{}' must be a list of {{\"id\", \"name\"}} objects",
                path.display()
            )
        })?;

        let mut ids = HashSet::new();
        for entry in &registry.classes {
            ensure!(
                ids.insert(entry.id),
                "duplicated class id {} in '{}'",
                entry.id,
                path.display()
            );
        }

        Ok(registry)
    }

    /// Write the class list as JSON indented by 4 spaces.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let mut buf = vec![];
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut serializer)?;
        fs::write(path, buf).with_context(|| format!("unable to write '{}'", path.display()))?;
        Ok(())
    }

    pub fn add(&mut self, id: i32, name: impl Into<String>) -> Result<()> {
        ensure!(self.get(id).is_none(), "class id {} already exists", id);
        self.classes.push(ClassEntry {
            id,
            name: name.into(),
        });
        Ok(())
    }

    pub fn rename(&mut self, id: i32, name: impl Into<String>) -> Result<()> {
        let entry = self
            .classes
            .iter_mut()
            .find(|entry| entry.id == id)
            .ok_or_else(|| format_err!("class id {} does not exist", id))?;
        entry.name = name.into();
        Ok(())
    }

    pub fn remove(&mut self, id: i32) -> Option<ClassEntry> {
        let index = self.classes.iter().position(|entry| entry.id == id)?;
        Some(self.classes.remove(index))
    }

    pub fn get(&self, id: i32) -> Option<&ClassEntry> {
        self.classes.iter().find(|entry| entry.id == id)
    }

    /// The smallest id above every existing id.
    pub fn next_id(&self) -> i32 {
        self.classes
            .iter()
            .map(|entry| entry.id.saturating_add(1))
            .max()
            .unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ClassEntry> {
        self.classes.iter()
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}
