use std::ops::{Index, IndexMut, Range};

/// Fixed-size vector indexed by node id (or any other unsigned number type).
#[derive(Clone, Debug)]
pub struct NodeVec<T> {
    data: Vec<T>,
}

impl<T: Clone> NodeVec<T> {
    pub fn with_default(size: usize, default: T) -> Self {
        Self {
            data: vec![default; size],
        }
    }
}

impl<T> NodeVec<T> {
    #[cfg(test)]
    pub fn from_vec(data: Vec<T>) -> Self {
        Self { data }
    }

    #[allow(unused)]
    #[inline(always)]
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

macro_rules! impl_index_t {
    ($t:ty) => {
        impl<T> Index<$t> for NodeVec<T> {
            type Output = T;

            #[inline(always)]
            fn index(&self, index: $t) -> &Self::Output {
                &self.data[index as usize]
            }
        }

        impl<T> IndexMut<$t> for NodeVec<T> {
            #[inline(always)]
            fn index_mut(&mut self, index: $t) -> &mut Self::Output {
                &mut self.data[index as usize]
            }
        }

        impl<T> Index<Range<$t>> for NodeVec<T> {
            type Output = [T];

            #[inline(always)]
            fn index(&self, index: Range<$t>) -> &Self::Output {
                &self.data[index.start as usize..index.end as usize]
            }
        }
    };
}

impl_index_t!(usize);
impl_index_t!(u32);

macro_rules! node_vec {
    [$default:expr; $size:expr] => {
        $crate::utils::NodeVec::with_default($size as usize, $default)
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indexes_by_u32_and_usize_alike() {
        let mut v: NodeVec<i64> = node_vec![-1; 3];
        v[1u32] = 7;
        assert_eq!(v[1usize], 7);
        assert_eq!(v[0u32], -1);
        assert_eq!(v.len(), 3);
    }

    #[test]
    fn range_index_returns_the_slice() {
        let v = NodeVec::from_vec(vec![10, 20, 30, 40]);
        assert_eq!(&v[1u32..3u32], &[20, 30]);
        assert!(v[2usize..2usize].is_empty());
    }

    #[test]
    #[should_panic]
    fn out_of_range_index_panics() {
        let v: NodeVec<u8> = node_vec![0; 2];
        let _ = v[2u32];
    }
}
