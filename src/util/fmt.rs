use std::fmt::{self, Debug, Formatter};

/// Debug-formats a bucket array as a list, with `-` for buckets that haven't been allocated and
/// the chain's items otherwise.
pub struct DebugBuckets<'a, T>(pub &'a [Option<Vec<T>>]);

impl<T: Debug> Debug for DebugBuckets<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut list = f.debug_list();
        for bucket in self.0 {
            match bucket {
                Some(chain) => list.entry(chain),
                None => list.entry(&format_args!("-")),
            };
        }
        list.finish()
    }
}
