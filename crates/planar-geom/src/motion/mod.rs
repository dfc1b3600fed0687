// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Particle motion against static wall segments.

#[doc = "Moving particles with swept AABB collision response."]
pub mod particle;
#[doc = "A world of particles and segments advanced tick by tick."]
pub mod simulation;
