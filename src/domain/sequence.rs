use serde::{Deserialize, Serialize};
use std::ops::Index;

/// 有序、可增長的容器，提供可串接的 map / filter / reduce。
///
/// 每個操作都回傳新的 `Sequence`（或 reduce 的純量），不會修改接收者。
/// 回呼依元素順序、每個元素恰好呼叫一次。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sequence<T> {
    items: Vec<T>,
}

impl<T> Sequence<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn push(&mut self, value: T) {
        self.items.push(value);
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn into_vec(self) -> Vec<T> {
        self.items
    }

    /// 對每個元素套用 `transform`，長度與順序不變。
    pub fn map<F>(&self, mut transform: F) -> Sequence<T>
    where
        F: FnMut(&T) -> T,
    {
        self.iter().map(|item| transform(item)).collect()
    }

    /// 保留 `predicate` 為真的元素，維持原本的相對順序。
    pub fn filter<F>(&self, mut predicate: F) -> Sequence<T>
    where
        T: Clone,
        F: FnMut(&T) -> bool,
    {
        self.iter().filter(|item| predicate(item)).cloned().collect()
    }

    /// 從 `initial` 開始由左至右折疊；空序列直接回傳 `initial`。
    pub fn reduce<F>(&self, mut combine: F, initial: T) -> T
    where
        F: FnMut(T, &T) -> T,
    {
        self.iter().fold(initial, |acc, item| combine(acc, item))
    }

    /// 可失敗版本的 [`Sequence::map`]。
    ///
    /// 第一個 `Err` 會立即中止，後續元素不再處理，錯誤原封不動回傳給呼叫端。
    pub fn try_map<E, F>(&self, mut transform: F) -> Result<Sequence<T>, E>
    where
        F: FnMut(&T) -> Result<T, E>,
    {
        self.iter().map(|item| transform(item)).collect()
    }

    /// 可失敗版本的 [`Sequence::filter`]。
    pub fn try_filter<E, F>(&self, mut predicate: F) -> Result<Sequence<T>, E>
    where
        T: Clone,
        F: FnMut(&T) -> Result<bool, E>,
    {
        let mut kept = Sequence::new();
        for item in self.iter() {
            if predicate(item)? {
                kept.push(item.clone());
            }
        }
        Ok(kept)
    }

    /// 可失敗版本的 [`Sequence::reduce`]。
    pub fn try_reduce<E, F>(&self, mut combine: F, initial: T) -> Result<T, E>
    where
        F: FnMut(T, &T) -> Result<T, E>,
    {
        self.iter().try_fold(initial, |acc, item| combine(acc, item))
    }
}

impl<T> Default for Sequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for Sequence<T> {
    fn from(items: Vec<T>) -> Self {
        Self { items }
    }
}

impl<T, const N: usize> From<[T; N]> for Sequence<T> {
    fn from(items: [T; N]) -> Self {
        Self {
            items: Vec::from(items),
        }
    }
}

impl<T: Clone> From<&[T]> for Sequence<T> {
    fn from(items: &[T]) -> Self {
        Self {
            items: items.to_vec(),
        }
    }
}

impl<T> FromIterator<T> for Sequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for Sequence<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<T> IntoIterator for Sequence<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Sequence<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T> Index<usize> for Sequence<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.items[index]
    }
}
