//! String pool for property names and string literal types.
//!
//! Labels and stringified values are stored once and referred to by
//! [`Atom`], a `u32` whose low bits pick the shard and whose high bits index
//! into it. The empty string is always atom `0`.

use rustc_hash::{FxHashMap, FxHasher};
use std::hash::{Hash, Hasher};
use std::sync::{Arc, RwLock};

const SHARD_BITS: u32 = 4;
const SHARD_COUNT: usize = 1 << SHARD_BITS;

/// Interned string handle. Equal atoms from one interner are equal strings.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Atom(pub u32);

impl Atom {
    /// The empty string.
    pub const NONE: Atom = Atom(0);

    fn pack(shard: usize, slot: usize) -> Option<Atom> {
        let slot = u32::try_from(slot).ok().filter(|slot| *slot <= u32::MAX >> SHARD_BITS)?;
        Some(Atom((slot << SHARD_BITS) | shard as u32))
    }

    fn shard(self) -> usize {
        (self.0 as usize) & (SHARD_COUNT - 1)
    }

    fn slot(self) -> usize {
        (self.0 >> SHARD_BITS) as usize
    }
}

/// Names that almost every bi-enum touches: the helper record's members and
/// the stringified classic primitives.
const COMMON_STRINGS: &[&str] = &[
    "allLabels",
    "allValues",
    "isLabel",
    "isValue",
    "arg",
    "true",
    "false",
    "null",
    "undefined",
    "NaN",
    "Infinity",
    "RegExp",
    "Function",
];

#[derive(Default)]
struct Shard {
    atoms: FxHashMap<Arc<str>, Atom>,
    strings: Vec<Arc<str>>,
}

/// String interner split into independently locked shards.
pub struct ShardedInterner {
    shards: [RwLock<Shard>; SHARD_COUNT],
}

impl ShardedInterner {
    pub fn new() -> Self {
        let shards: [RwLock<Shard>; SHARD_COUNT] = std::array::from_fn(|_| RwLock::default());
        {
            let mut first = shards[0].write().expect("interner shard lock poisoned");
            let empty: Arc<str> = Arc::from("");
            first.strings.push(empty.clone());
            first.atoms.insert(empty, Atom::NONE);
        }
        ShardedInterner { shards }
    }

    pub fn intern(&self, s: &str) -> Atom {
        if s.is_empty() {
            return Atom::NONE;
        }
        let index = shard_index(s);
        let lock = &self.shards[index];

        if let Some(&atom) = lock.read().expect("interner shard lock poisoned").atoms.get(s) {
            return atom;
        }

        let mut shard = lock.write().expect("interner shard lock poisoned");
        if let Some(&atom) = shard.atoms.get(s) {
            return atom;
        }
        let Some(atom) = Atom::pack(index, shard.strings.len()) else {
            return Atom::NONE;
        };
        let owned: Arc<str> = Arc::from(s);
        shard.strings.push(owned.clone());
        shard.atoms.insert(owned, atom);
        atom
    }

    /// The string for `atom`; unknown atoms read as the empty string.
    pub fn resolve(&self, atom: Atom) -> Arc<str> {
        self.shards[atom.shard()]
            .read()
            .expect("interner shard lock poisoned")
            .strings
            .get(atom.slot())
            .cloned()
            .unwrap_or_else(|| Arc::from(""))
    }

    /// Number of interned strings, the empty string included.
    pub fn len(&self) -> usize {
        self.shards
            .iter()
            .map(|lock| lock.read().expect("interner shard lock poisoned").strings.len())
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() <= 1
    }

    /// Pre-intern the helper names and primitive spellings.
    pub fn intern_common(&self) {
        for s in COMMON_STRINGS {
            self.intern(s);
        }
    }
}

impl Default for ShardedInterner {
    fn default() -> Self {
        Self::new()
    }
}

fn shard_index(s: &str) -> usize {
    let mut hasher = FxHasher::default();
    s.hash(&mut hasher);
    (hasher.finish() as usize) & (SHARD_COUNT - 1)
}

#[cfg(test)]
#[path = "../tests/interner_tests.rs"]
mod tests;
