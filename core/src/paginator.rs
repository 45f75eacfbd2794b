/// Fixed-size, borrowed pages over a slice. The last page holds the remainder.
#[derive(Debug, Clone)]
pub struct Paginator<'a, T> {
    pages: Vec<&'a [T]>,
}

impl<'a, T> Paginator<'a, T> {
    /// A `page_size` of zero yields no pages.
    pub fn new(items: &'a [T], page_size: usize) -> Self {
        let pages = if page_size == 0 { Vec::new() } else { items.chunks(page_size).collect() };
        Self { pages }
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a [T]> + '_ {
        self.pages.iter().copied()
    }
}

impl<'a, 'p, T> IntoIterator for &'p Paginator<'a, T> {
    type Item = &'a [T];
    type IntoIter = std::iter::Copied<std::slice::Iter<'p, &'a [T]>>;

    fn into_iter(self) -> Self::IntoIter {
        self.pages.iter().copied()
    }
}

impl<'a, T> IntoIterator for Paginator<'a, T> {
    type Item = &'a [T];
    type IntoIter = std::vec::IntoIter<&'a [T]>;

    fn into_iter(self) -> Self::IntoIter {
        self.pages.into_iter()
    }
}

pub fn paginate<T>(items: &[T], page_size: usize) -> Paginator<'_, T> {
    Paginator::new(items, page_size)
}
