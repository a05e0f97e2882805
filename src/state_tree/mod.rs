// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT


use ahash::HashMap;
use anyhow::{Context as _, bail, ensure};

use crate::address::Address;
use crate::shim::econ::TokenAmount;

/// Actor record as held by the state tree.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ActorState {
    /// Sum of tokens held by the actor.
    pub balance: TokenAmount,
    /// Nonce of the next outgoing message.
    pub sequence: u64,
    /// Opaque actor storage.
    pub storage: Vec<u8>,
}

impl ActorState {
    pub fn new(balance: TokenAmount, sequence: u64) -> Self {
        Self {
            balance,
            sequence,
            storage: Vec::new(),
        }
    }

    /// Empty account actor, used when a message targets an unknown address.
    pub fn new_empty() -> Self {
        Self::default()
    }

    /// Safely deducts funds from an Actor
    pub fn deduct_funds(&mut self, amt: &TokenAmount) -> anyhow::Result<()> {
        self.balance = self.balance.checked_sub(amt).with_context(|| {
            format!("not enough funds: balance {} < {}", self.balance, amt)
        })?;
        Ok(())
    }

    /// Deposits funds to an Actor
    pub fn deposit_funds(&mut self, amt: &TokenAmount) {
        self.balance += amt;
    }
}

/// Authoritative mapping from address to actor record.
///
/// Writes land in the top snapshot layer until that layer is committed with
/// [`StateTree::clear_snapshot`] or dropped with
/// [`StateTree::revert_to_snapshot`]. Callers must hold exclusive access for
/// the whole processing of one top-level message.
pub trait StateTree {
    fn get_actor(&self, addr: &Address) -> anyhow::Result<Option<ActorState>>;

    fn set_actor(&mut self, addr: &Address, actor: ActorState) -> anyhow::Result<()>;

    fn delete_actor(&mut self, addr: &Address) -> anyhow::Result<()>;

    /// Returns the actor at `addr`, creating and storing the one built by
    /// `factory` when absent.
    fn get_or_create_actor<F>(&mut self, addr: &Address, factory: F) -> anyhow::Result<ActorState>
    where
        F: FnOnce() -> anyhow::Result<ActorState>,
    {
        if let Some(actor) = self.get_actor(addr)? {
            return Ok(actor);
        }
        let actor = factory()?;
        self.set_actor(addr, actor.clone())?;
        Ok(actor)
    }

    /// Pushes a new snapshot layer.
    fn snapshot(&mut self) -> anyhow::Result<()>;

    /// Merges the top layer into the one below it.
    fn clear_snapshot(&mut self) -> anyhow::Result<()>;

    /// Discards every write made since the matching [`StateTree::snapshot`].
    fn revert_to_snapshot(&mut self) -> anyhow::Result<()>;
}

/// State snap shot layer. `None` marks a deletion.
type StateSnapLayer = HashMap<Address, Option<ActorState>>;

/// In-memory state tree with a stack of snapshot layers over the flushed
/// actor map. Not thread safe; wrap it in a lock to share it.
#[derive(Debug)]
pub struct MemoryStateTree {
    actors: HashMap<Address, ActorState>,
    layers: Vec<StateSnapLayer>,
}

impl Default for MemoryStateTree {
    fn default() -> Self {
        Self {
            actors: HashMap::default(),
            layers: vec![StateSnapLayer::default()],
        }
    }
}

impl MemoryStateTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of snapshot layers, the base layer included.
    pub fn depth(&self) -> usize {
        self.layers.len()
    }

    /// Folds the base layer into the actor map. Fails when snapshots are
    /// still open.
    pub fn flush(&mut self) -> anyhow::Result<()> {
        ensure!(
            self.layers.len() == 1,
            "tried to flush state tree with snapshots on the stack: {}",
            self.layers.len()
        );
        for (addr, actor) in self.layers[0].drain() {
            match actor {
                Some(actor) => {
                    self.actors.insert(addr, actor);
                }
                None => {
                    self.actors.remove(&addr);
                }
            }
        }
        Ok(())
    }

    /// Visits every live actor, pending layers included.
    pub fn for_each<F>(&self, mut f: F) -> anyhow::Result<()>
    where
        F: FnMut(&Address, &ActorState) -> anyhow::Result<()>,
    {
        let mut seen: HashMap<&Address, Option<&ActorState>> = HashMap::default();
        for layer in self.layers.iter().rev() {
            for (addr, actor) in layer {
                seen.entry(addr).or_insert(actor.as_ref());
            }
        }
        for (addr, actor) in &self.actors {
            seen.entry(addr).or_insert(Some(actor));
        }
        for (addr, actor) in seen {
            if let Some(actor) = actor {
                f(addr, actor)?;
            }
        }
        Ok(())
    }

    fn top_layer(&mut self) -> anyhow::Result<&mut StateSnapLayer> {
        self.layers
            .last_mut()
            .context("state tree has no snapshot layer")
    }
}

impl StateTree for MemoryStateTree {
    fn get_actor(&self, addr: &Address) -> anyhow::Result<Option<ActorState>> {
        for layer in self.layers.iter().rev() {
            if let Some(actor) = layer.get(addr) {
                return Ok(actor.clone());
            }
        }
        Ok(self.actors.get(addr).cloned())
    }

    fn set_actor(&mut self, addr: &Address, actor: ActorState) -> anyhow::Result<()> {
        if addr.is_empty() {
            bail!("cannot set actor state at the empty address");
        }
        self.top_layer()?.insert(addr.clone(), Some(actor));
        Ok(())
    }

    fn delete_actor(&mut self, addr: &Address) -> anyhow::Result<()> {
        self.top_layer()?.insert(addr.clone(), None);
        Ok(())
    }

    fn snapshot(&mut self) -> anyhow::Result<()> {
        self.layers.push(StateSnapLayer::default());
        Ok(())
    }

    fn clear_snapshot(&mut self) -> anyhow::Result<()> {
        ensure!(
            self.layers.len() > 1,
            "merging layers failed: no snapshot to merge"
        );
        let top = self.layers.pop().context("missing top snapshot layer")?;
        self.top_layer()?.extend(top);
        Ok(())
    }

    fn revert_to_snapshot(&mut self) -> anyhow::Result<()> {
        ensure!(
            self.layers.len() > 1,
            "drop layer failed: no snapshot to revert"
        );
        self.layers.pop();
        Ok(())
    }
}
