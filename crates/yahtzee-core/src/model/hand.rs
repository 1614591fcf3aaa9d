use crate::model::retention::Retention;
use rand::Rng;
use serde::{Deserialize, Serialize};

pub const HAND_SIZE: usize = 5;

/// The five current die faces for a turn, each in 1..=6. Positions are
/// stable across rerolls so a [`Retention`] can address them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    faces: [u8; HAND_SIZE],
}

impl Hand {
    pub fn from_faces(faces: [u8; HAND_SIZE]) -> Self {
        debug_assert!(faces.iter().all(|face| (1..=6).contains(face)));
        Self { faces }
    }

    /// A fresh uniformly random hand at the start of a turn.
    pub fn rolled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut faces = [0u8; HAND_SIZE];
        for face in faces.iter_mut() {
            *face = rng.gen_range(1..=6);
        }
        Self { faces }
    }

    /// Re-randomizes every position NOT covered by `retention`, in place.
    pub fn reroll<R: Rng + ?Sized>(&mut self, retention: Retention, rng: &mut R) {
        for (position, face) in self.faces.iter_mut().enumerate() {
            if !retention.keeps(position) {
                *face = rng.gen_range(1..=6);
            }
        }
    }

    pub const fn faces(&self) -> [u8; HAND_SIZE] {
        self.faces
    }

    pub fn sum(&self) -> u32 {
        self.faces.iter().map(|&face| face as u32).sum()
    }

    pub fn count_of(&self, face: u8) -> u32 {
        self.faces.iter().filter(|&&f| f == face).count() as u32
    }

    /// Per-face counts indexed by face value (index 0 unused).
    pub fn face_counts(&self) -> [u32; 7] {
        let mut counts = [0u32; 7];
        for &face in &self.faces {
            counts[face as usize] += 1;
        }
        counts
    }

    /// The face with the highest count; ties resolve toward the lower face.
    pub fn majority_face(&self) -> u8 {
        let counts = self.face_counts();
        let mut best = 1u8;
        for face in 2..=6u8 {
            if counts[face as usize] > counts[best as usize] {
                best = face;
            }
        }
        best
    }

    /// Positions of every die showing `face`.
    pub fn positions_of(&self, face: u8) -> Vec<usize> {
        self.faces
            .iter()
            .enumerate()
            .filter(|&(_, &f)| f == face)
            .map(|(position, _)| position)
            .collect()
    }

    /// Distinct faces in ascending order.
    pub fn distinct_faces(&self) -> Vec<u8> {
        let counts = self.face_counts();
        (1..=6u8)
            .filter(|&face| counts[face as usize] > 0)
            .collect()
    }

    /// The longest run of consecutive distinct faces; the later run wins a
    /// length tie so the higher straight is preferred.
    pub fn longest_run(&self) -> Vec<u8> {
        let distinct = self.distinct_faces();
        let mut best: Vec<u8> = Vec::new();
        let mut current: Vec<u8> = Vec::new();
        for &face in &distinct {
            match current.last() {
                Some(&previous) if face == previous + 1 => current.push(face),
                _ => {
                    if current.len() > best.len() {
                        best = current.clone();
                    }
                    current = vec![face];
                }
            }
        }
        if current.len() >= best.len() {
            best = current;
        }
        best
    }
}
