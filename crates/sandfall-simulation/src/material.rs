//! Material definitions and behavioral classes

use serde::{Deserialize, Serialize};

/// A particle material.
///
/// Materials fall into three behavioral classes:
/// - *Static* materials never change position and only react with fixed
///   neighbors (walls, torches, spouts, ...).
/// - *Mobile* materials fall under gravity and spread sideways.
/// - *Floating* materials (a subset of mobile) rise instead of falling.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Material {
    #[default]
    Empty,

    // Static
    Wall,
    IronWall,
    Torch,
    Stove,
    Ice,
    Rust,
    Ember,
    Plant,
    Void,

    // Static spouts
    WaterSpout,
    SandSpout,
    SaltSpout,
    OilSpout,

    // Elemental
    Water,
    Dirt,
    Salt,
    Oil,
    Sand,

    // Combined
    SaltWater,
    Mud,
    Acid,

    // Floating
    Steam,
    Fire,

    // Falls like a mobile material but is excluded from buoyancy
    Electricity,
}

impl Material {
    /// Static materials react in place and are never moved by the scheduler.
    pub fn is_static(self) -> bool {
        matches!(
            self,
            Material::Wall
                | Material::IronWall
                | Material::Torch
                | Material::Stove
                | Material::Ice
                | Material::Rust
                | Material::Ember
                | Material::Plant
                | Material::Void
                | Material::WaterSpout
                | Material::SandSpout
                | Material::SaltSpout
                | Material::OilSpout
        )
    }

    /// Mobile materials are subject to the movement rules.
    pub fn is_mobile(self) -> bool {
        !self.is_static() && self != Material::Empty
    }

    /// Floating materials rise instead of falling.
    pub fn is_floating(self) -> bool {
        matches!(self, Material::Steam | Material::Fire)
    }

    /// Materials fire can consume.
    pub fn is_burnable(self) -> bool {
        matches!(self, Material::Plant | Material::Oil)
    }

    /// Burnable materials that smolder as ember instead of open flame.
    pub fn burns_as_ember(self) -> bool {
        self == Material::Plant
    }

    /// Display color as 0xAARRGGBB. Moved cells resolve to the same color
    /// as their settled counterpart since the flag lives outside the material.
    pub fn color(self) -> u32 {
        match self {
            Material::Empty => 0x0000_0000,
            Material::Wall => 0xff64_6464,
            Material::IronWall => 0xff6e_6e6e,
            Material::Torch => 0xff8b_4520,
            Material::Stove => 0xff4a_4a4a,
            Material::Ice => 0xffaf_eeee,
            Material::Rust => 0xff6e_280a,
            Material::Ember => 0xff7f_2020,
            Material::Plant => 0xff00_9600,
            Material::Void => 0xff3c_3c3c,
            Material::WaterSpout => 0xff00_0080,
            Material::SandSpout => 0xfff0_e68c,
            Material::SaltSpout => 0xffee_eaea,
            Material::OilSpout => 0xff6c_2c2c,
            Material::Water => 0xff20_20ff,
            Material::Dirt => 0xffcd_af96,
            Material::Salt => 0xffff_ffff,
            Material::Oil => 0xff80_4040,
            Material::Sand => 0xffee_cc80,
            Material::SaltWater => 0xff40_70e0,
            Material::Mud => 0xff8b_4515,
            Material::Acid => 0xffad_ff2f,
            Material::Steam => 0xff5f_9ea0,
            Material::Fire => 0xffff_3232,
            Material::Electricity => 0xffff_ff00,
        }
    }

    /// Short name for HUD display and logging.
    pub fn name(self) -> &'static str {
        match self {
            Material::Empty => "empty",
            Material::Wall => "wall",
            Material::IronWall => "iron_wall",
            Material::Torch => "torch",
            Material::Stove => "stove",
            Material::Ice => "ice",
            Material::Rust => "rust",
            Material::Ember => "ember",
            Material::Plant => "plant",
            Material::Void => "void",
            Material::WaterSpout => "water_spout",
            Material::SandSpout => "sand_spout",
            Material::SaltSpout => "salt_spout",
            Material::OilSpout => "oil_spout",
            Material::Water => "water",
            Material::Dirt => "dirt",
            Material::Salt => "salt",
            Material::Oil => "oil",
            Material::Sand => "sand",
            Material::SaltWater => "salt_water",
            Material::Mud => "mud",
            Material::Acid => "acid",
            Material::Steam => "steam",
            Material::Fire => "fire",
            Material::Electricity => "electricity",
        }
    }
}
