use std::{
    iter::{Copied, Map},
    slice::Iter,
};

use itertools::Itertools;

use super::*;

/// Basic Neighborhood-Impl. using `Vec<NodeIndex>`
#[derive(Debug, Default, Clone)]
pub struct ArrNeighborhood(pub Vec<NodeIndex>);

impl Neighborhood for ArrNeighborhood {
    type Label = ();

    fn num_of_neighbors(&self) -> NumNodes {
        self.0.len() as NumNodes
    }

    type NeighborhoodIter<'a>
        = Copied<Iter<'a, NodeIndex>>
    where
        Self: 'a;

    fn neighbors(&self) -> Self::NeighborhoodIter<'_> {
        self.0.iter().copied()
    }

    fn labelled_neighbors(&self) -> impl Iterator<Item = (NodeIndex, ())> + '_ {
        self.neighbors().map(|v| (v, ()))
    }

    fn label_of(&self, v: NodeIndex) -> Option<()> {
        self.0.contains(&v).then_some(())
    }

    fn try_add_neighbor(&mut self, v: NodeIndex, _: ()) -> bool {
        if self.0.contains(&v) {
            true
        } else {
            self.0.push(v);
            false
        }
    }

    fn try_remove_neighbor(&mut self, v: NodeIndex) -> bool {
        if let Some((pos, _)) = self.0.iter().find_position(|&&x| x == v) {
            self.0.remove(pos);
            true
        } else {
            false
        }
    }

    fn clear(&mut self) {
        self.0.clear();
    }
}

type NeighborOfPair = fn(&(NodeIndex, Weight)) -> NodeIndex;

fn neighbor_of_pair(&(v, _): &(NodeIndex, Weight)) -> NodeIndex {
    v
}

/// Neighborhood storing a [`Weight`] per neighbor using `Vec<(NodeIndex, Weight)>`
#[derive(Debug, Default, Clone)]
pub struct WeightedNeighborhood(pub Vec<(NodeIndex, Weight)>);

impl WeightedNeighborhood {
    fn position_of(&self, v: NodeIndex) -> Option<usize> {
        self.0.iter().position(|&(x, _)| x == v)
    }
}

impl Neighborhood for WeightedNeighborhood {
    type Label = Weight;

    fn num_of_neighbors(&self) -> NumNodes {
        self.0.len() as NumNodes
    }

    type NeighborhoodIter<'a>
        = Map<Iter<'a, (NodeIndex, Weight)>, NeighborOfPair>
    where
        Self: 'a;

    fn neighbors(&self) -> Self::NeighborhoodIter<'_> {
        self.0.iter().map(neighbor_of_pair as NeighborOfPair)
    }

    fn labelled_neighbors(&self) -> impl Iterator<Item = (NodeIndex, Weight)> + '_ {
        self.0.iter().copied()
    }

    fn label_of(&self, v: NodeIndex) -> Option<Weight> {
        self.position_of(v).map(|pos| self.0[pos].1)
    }

    fn try_add_neighbor(&mut self, v: NodeIndex, weight: Weight) -> bool {
        match self.position_of(v) {
            Some(pos) => {
                self.0[pos].1 = weight;
                true
            }
            None => {
                self.0.push((v, weight));
                false
            }
        }
    }

    fn try_remove_neighbor(&mut self, v: NodeIndex) -> bool {
        match self.position_of(v) {
            Some(pos) => {
                self.0.remove(pos);
                true
            }
            None => false,
        }
    }

    fn clear(&mut self) {
        self.0.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arr_neighborhood() {
        let mut nbs = ArrNeighborhood::default();
        assert!(!nbs.try_add_neighbor(3, ()));
        assert!(!nbs.try_add_neighbor(1, ()));
        assert!(!nbs.try_add_neighbor(2, ()));
        assert!(nbs.try_add_neighbor(1, ()));
        assert_eq!(nbs.num_of_neighbors(), 3);
        assert_eq!(nbs.neighbors().collect_vec(), vec![3, 1, 2]);

        assert!(nbs.try_remove_neighbor(3));
        assert!(!nbs.try_remove_neighbor(3));
        assert_eq!(nbs.neighbors().collect_vec(), vec![1, 2]);
        assert!(nbs.has_neighbor(2));
        assert!(!nbs.has_neighbor(3));
    }

    #[test]
    fn weighted_neighborhood_overwrites() {
        let mut nbs = WeightedNeighborhood::default();
        assert!(!nbs.try_add_neighbor(4, 10));
        assert!(!nbs.try_add_neighbor(0, 3));
        assert!(nbs.try_add_neighbor(4, 7));

        assert_eq!(nbs.labelled_neighbors().collect_vec(), vec![(4, 7), (0, 3)]);
        assert_eq!(nbs.label_of(4), Some(7));
        assert_eq!(nbs.label_of(1), None);

        assert!(nbs.try_remove_neighbor(4));
        assert_eq!(nbs.neighbors().collect_vec(), vec![0]);

        nbs.clear();
        assert_eq!(nbs.num_of_neighbors(), 0);
    }
}
