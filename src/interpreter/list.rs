use super::number::Number;

#[derive(Debug, Clone, PartialEq)]
pub enum Item {
    Number(Number),
    List(List),
}

impl std::fmt::Display for Item {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::List(l) => write!(f, "{l}"),
        }
    }
}

/// Ordered list of numbers and nested lists.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct List {
    items: Vec<Item>,
}

impl List {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    pub fn try_reserve(
        &mut self,
        additional: usize,
    ) -> Result<(), std::collections::TryReserveError> {
        self.items.try_reserve(additional)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Item> {
        self.items.iter()
    }

    pub fn push(&mut self, item: Item) {
        self.items.push(item);
    }

    pub fn push_number(&mut self, number: Number) {
        self.items.push(Item::Number(number));
    }

    pub fn push_list(&mut self, list: List) {
        self.items.push(Item::List(list));
    }
}

impl FromIterator<Number> for List {
    fn from_iter<T: IntoIterator<Item = Number>>(iter: T) -> Self {
        Self {
            items: iter.into_iter().map(Item::Number).collect(),
        }
    }
}

impl FromIterator<Item> for List {
    fn from_iter<T: IntoIterator<Item = Item>>(iter: T) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a List {
    type Item = &'a Item;
    type IntoIter = std::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl std::fmt::Display for List {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{item}")?;
        }
        write!(f, "]")
    }
}
