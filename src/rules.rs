//! Particle-substitution rules that turn one edit into an amendment sentence of the
//! form `"<A>"을 "<B>"로 한다.`

use crate::hangul::{has_final_consonant, has_liquid_final, instrumental_marker, object_marker};
use crate::josa::Particle;

/// How the particle that followed the original chunk is carried into the sentence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rewrite {
    /// Only the chunks are quoted; the particle outside the quotes is left alone.
    ObjectMarker,
    /// The particle is quoted with both chunks and swapped for its counterpart.
    ParticleSwap { from: Particle, to: Particle },
}

fn swap_when(condition: bool, from: Particle, to: Particle) -> Rewrite {
    if condition {
        Rewrite::ParticleSwap { from, to }
    } else {
        Rewrite::ObjectMarker
    }
}

/// Picks the rewrite for an edit whose original chunk was followed by `particle`.
///
/// Each particle pair flips toward the form the replacement's last syllable calls
/// for. A ㄹ-final replacement counts as closed here (서울은, 서울이), so only 으로/로
/// treat ㄹ like an open syllable. 을 never flips and stays outside the quotes.
pub fn rewrite_for(particle: Option<Particle>, replaced: &str) -> Rewrite {
    let Some(particle) = particle else {
        return Rewrite::ObjectMarker;
    };
    let closed = has_final_consonant(replaced);
    let closed_non_liquid = closed && !has_liquid_final(replaced);

    match particle {
        Particle::Eul => Rewrite::ObjectMarker,
        // consonant forms give way to vowel forms after an open replacement
        Particle::I => swap_when(!closed, Particle::I, Particle::Ga),
        Particle::Eun => swap_when(!closed, Particle::Eun, Particle::Neun),
        Particle::Ina => swap_when(!closed, Particle::Ina, Particle::Na),
        Particle::Gwa => swap_when(!closed, Particle::Gwa, Particle::Wa),
        Particle::Iran => swap_when(!closed, Particle::Iran, Particle::Ran),
        // vowel forms give way to consonant forms after a closed replacement
        Particle::Ga => swap_when(closed, Particle::Ga, Particle::I),
        Particle::Reul => swap_when(closed, Particle::Reul, Particle::Eul),
        Particle::Wa => swap_when(closed, Particle::Wa, Particle::Gwa),
        Particle::Na => swap_when(closed, Particle::Na, Particle::Ina),
        Particle::Neun => swap_when(closed, Particle::Neun, Particle::Eun),
        Particle::Ran => swap_when(closed, Particle::Ran, Particle::Iran),
        Particle::Euro => swap_when(!closed_non_liquid, Particle::Euro, Particle::Ro),
        Particle::Ro => swap_when(closed_non_liquid, Particle::Ro, Particle::Euro),
    }
}

/// Renders one rewrite as a full sentence.
pub fn render_rewrite(rewrite: Rewrite, orig: &str, replaced: &str) -> String {
    let (before, after) = match rewrite {
        Rewrite::ObjectMarker => (orig.to_string(), replaced.to_string()),
        Rewrite::ParticleSwap { from, to } => (format!("{orig}{from}"), format!("{replaced}{to}")),
    };
    format!(
        "\"{before}\"{} \"{after}\"{} 한다.",
        object_marker(&before),
        instrumental_marker(&after)
    )
}

pub fn render_particle_edit(orig: &str, replaced: &str, particle: Option<Particle>) -> String {
    render_rewrite(rewrite_for(particle, replaced), orig, replaced)
}

/// Renders an edit from a raw particle string. Unknown particles use the
/// no-particle rule.
pub fn render_edit(orig: &str, replaced: &str, particle: Option<&str>) -> String {
    render_particle_edit(orig, replaced, particle.and_then(Particle::parse))
}
