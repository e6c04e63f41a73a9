//! Sky condition and vertical visibility.

use super::helpers::{first, hundreds_of_feet};
use crate::engine::ChunkShape;
use crate::report::{CloudCover, CloudType, SkyCondition};
use crate::units::Distance;
use crate::{Groups, Rule};

fn cloud_type(code: Option<&str>) -> Option<CloudType> {
    match code? {
        "CB" => Some(CloudType::Cumulonimbus),
        "TCU" => Some(CloudType::ToweringCumulus),
        _ => None,
    }
}

/// `NSC`, `NCD`, `CLR`, `SKC`
pub fn rule_clear_sky() -> Rule<SkyCondition> {
    rule! {
        name: "sky (clear)",
        pattern: [re!(r"^(?:NSC|NCD|CLR|SKC)$")],
        shape: ChunkShape::HAS_LETTERS,
        prod: |_groups: &[Groups]| -> Option<SkyCondition> { Some(SkyCondition::clear()) },
    }
}

pub fn rule_cloud_layer() -> Rule<SkyCondition> {
    rule! {
        name: "sky (cover + height)",
        pattern: [re!(r"^(?P<cover>BKN|FEW|OVC|SCT)(?P<height>\d{3}|///)(?P<cloud_type>CB|TCU|///)?$")],
        shape: ChunkShape::HAS_LETTERS,
        prod: |groups: &[Groups]| -> Option<SkyCondition> {
            let g = first(groups)?;
            let cover = match g.get("cover")? {
                "FEW" => CloudCover::Few,
                "SCT" => CloudCover::Scattered,
                "BKN" => CloudCover::Broken,
                _ => CloudCover::Overcast,
            };

            Some(SkyCondition {
                cover: Some(cover),
                height: Some(hundreds_of_feet(g.get("height")?)?),
                cloud_type: cloud_type(g.get("cloud_type")),
            })
        },
    }
}

pub fn rule_cloud_type_only() -> Rule<SkyCondition> {
    rule! {
        name: "sky (CB|TCU)",
        pattern: [re!(r"^(?P<cloud_type>CB|TCU)$")],
        shape: ChunkShape::HAS_LETTERS,
        prod: |groups: &[Groups]| -> Option<SkyCondition> {
            Some(SkyCondition { cover: None, height: None, cloud_type: Some(cloud_type(first(groups)?.get("cloud_type"))?) })
        },
    }
}

/// `VVddd` / `VV///`
pub fn rule_vertical_visibility() -> Rule<Distance> {
    rule! {
        name: "vertical visibility (VVddd)",
        pattern: [re!(r"^VV(?P<height>\d{3}|///)$")],
        shape: ChunkShape::HAS_LETTERS,
        prod: |groups: &[Groups]| -> Option<Distance> {
            hundreds_of_feet(first(groups)?.get("height")?)
        },
    }
}

pub fn sky_rules() -> Vec<Rule<SkyCondition>> {
    vec![rule_clear_sky(), rule_cloud_layer(), rule_cloud_type_only()]
}

pub fn vertical_visibility_rules() -> Vec<Rule<Distance>> {
    vec![rule_vertical_visibility()]
}
