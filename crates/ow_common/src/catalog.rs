//! Static descriptor catalog.
//!
//! Location fragments are relative to the container they are applied in:
//! the aggregate block for common metrics, the character block otherwise.

use crate::registry::{CharacterEntry, MetricDescriptor, Role};

#[rustfmt::skip]
pub(crate) const COMMON: &[MetricDescriptor] = &[
    MetricDescriptor::duration("time_played", "Time Played", "ow_hero_time_played_seconds", "Total time played on hero", "[data-category-id='0x0860000000000021']"),
    MetricDescriptor::count("games_won", "Games Won", "ow_hero_games_won_total", "Total number of games won with hero", "[data-category-id='0x0860000000000039']"),
    MetricDescriptor::percentage("win_percentage", "Win Percentage", "ow_hero_win_percentage", "Win percentage with hero", "[data-category-id='0x08600000000003D1']"),
    MetricDescriptor::percentage("weapon_accuracy", "Weapon Accuracy", "ow_hero_weapon_accuracy_percent", "Best weapon accuracy percentage with hero", "[data-category-id='0x08600000000001BB']"),
    MetricDescriptor::count("eliminations_per_life", "Eliminations Per Life", "ow_hero_eliminations_per_life", "Average eliminations per life with hero", "[data-category-id='0x08600000000003D2']"),
    MetricDescriptor::count("kill_streak_best", "Kill Streak Best", "ow_hero_kill_streak_best", "Best kill streak achieved with hero", "[data-category-id='0x0860000000000223']"),
    MetricDescriptor::count("multikill_best", "Multikill Best", "ow_hero_multikill_best", "Best multikill achieved with hero", "[data-category-id='0x0860000000000346']"),
    MetricDescriptor::count("eliminations_per_10min", "Eliminations Per 10 Min", "ow_hero_eliminations_per_10min_avg", "Average eliminations per 10 minutes with hero", "[data-category-id='0x08600000000004D4']"),
    MetricDescriptor::count("deaths_per_10min", "Deaths Per 10 Min", "ow_hero_deaths_per_10min_avg", "Average deaths per 10 minutes with hero", "[data-category-id='0x08600000000004D3']"),
    MetricDescriptor::count("final_blows_per_10min", "Final Blows Per 10 Min", "ow_hero_final_blows_per_10min_avg", "Average final blows per 10 minutes with hero", "[data-category-id='0x08600000000004D5']"),
    MetricDescriptor::count("solo_kills_per_10min", "Solo Kills Per 10 Min", "ow_hero_solo_kills_per_10min_avg", "Average solo kills per 10 minutes with hero", "[data-category-id='0x08600000000004DA']"),
    MetricDescriptor::count("objective_kills_per_10min", "Objective Kills Per 10 Min", "ow_hero_objective_kills_per_10min_avg", "Average objective kills per 10 minutes with hero", "[data-category-id='0x08600000000004D8']"),
    MetricDescriptor::duration("objective_time_per_10min", "Objective Time Per 10 Min", "ow_hero_objective_time_per_10min_avg", "Average objective time per 10 minutes with hero", "[data-category-id='0x08600000000004D9']"),
    MetricDescriptor::count("hero_damage_per_10min", "Hero Damage Per 10 Min", "ow_hero_damage_per_10min_avg", "Average hero damage per 10 minutes", "[data-category-id='0x08600000000004BD']"),
    MetricDescriptor::count("healing_per_10min", "Healing Per 10 Min", "ow_hero_healing_per_10min_avg", "Average healing done per 10 minutes", "[data-category-id='0x08600000000004D6']"),
];

#[rustfmt::skip]
pub(crate) const CHARACTERS: &[CharacterEntry] = &[
    CharacterEntry::new("soldier-76", "Soldier: 76", Role::Damage, &[
        MetricDescriptor::count("helix_rocket_kills", "Helix Rocket Kills", "ow_hero_helix_rocket_kills_total", "Total eliminations with helix rockets", "[data-stat='helix_rocket_kills']"),
        MetricDescriptor::count("helix_rocket_kills_best", "Helix Rocket Kills Best", "ow_hero_helix_rocket_kills_best", "Most helix rocket kills in a single game", "[data-stat='helix_rocket_kills_best']"),
        MetricDescriptor::count("biotic_field_healing", "Biotic Field Healing", "ow_hero_biotic_field_healing_total", "Total healing provided by biotic field", "[data-stat='biotic_field_healing']"),
        MetricDescriptor::count("tactical_visor_kills", "Tactical Visor Kills", "ow_hero_tactical_visor_kills_total", "Total eliminations during tactical visor ultimate", "[data-stat='tactical_visor_kills']"),
    ]),
    CharacterEntry::new("widowmaker", "Widowmaker", Role::Damage, &[
        MetricDescriptor::percentage("scoped_accuracy", "Scoped Accuracy", "ow_hero_scoped_accuracy_percent", "Scoped weapon accuracy percentage", "[data-stat='scoped_accuracy']"),
        MetricDescriptor::count("scoped_critical_hits", "Scoped Critical Hits", "ow_hero_scoped_critical_hits_total", "Total scoped critical hits", "[data-stat='scoped_critical_hits']"),
        MetricDescriptor::count("venom_mine_kills", "Venom Mine Kills", "ow_hero_venom_mine_kills_total", "Total eliminations with venom mine", "[data-stat='venom_mine_kills']"),
        MetricDescriptor::count("infra_sight_assists", "Infra Sight Assists", "ow_hero_infra_sight_assists_total", "Team assists provided by infra-sight ultimate", "[data-stat='infra_sight_assists']"),
    ]),
    CharacterEntry::new("genji", "Genji", Role::Damage, &[
        MetricDescriptor::count("deflection_kills", "Deflection Kills", "ow_hero_deflection_kills_total", "Total eliminations with deflected projectiles", "[data-stat='deflection_kills']"),
        MetricDescriptor::count("swift_strike_kills", "Swift Strike Kills", "ow_hero_swift_strike_kills_total", "Total eliminations with swift strike", "[data-stat='swift_strike_kills']"),
        MetricDescriptor::count("dragonblade_kills", "Dragonblade Kills", "ow_hero_dragonblade_kills_total", "Total eliminations during dragonblade ultimate", "[data-stat='dragonblade_kills']"),
        MetricDescriptor::count("damage_deflected", "Damage Deflected", "ow_hero_damage_deflected_total", "Total damage deflected by deflect ability", "[data-stat='damage_deflected']"),
    ]),
    CharacterEntry::new("torbjorn", "Torbjörn", Role::Damage, &[
        MetricDescriptor::count("turret_kills", "Turret Kills", "ow_hero_turret_kills_total", "Total eliminations by deployed turret", "[data-stat='turret_kills']"),
        MetricDescriptor::count("turret_damage", "Turret Damage", "ow_hero_turret_damage_total", "Total damage dealt by turret", "[data-stat='turret_damage']"),
        MetricDescriptor::count("hammer_kills", "Hammer Kills", "ow_hero_hammer_kills_total", "Total eliminations with forge hammer", "[data-stat='hammer_kills']"),
        MetricDescriptor::count("armor_packs_created", "Armor Packs Created", "ow_hero_armor_packs_created_total", "Total armor packs created for teammates", "[data-stat='armor_packs_created']"),
        MetricDescriptor::count("molten_core_kills", "Molten Core Kills", "ow_hero_molten_core_kills_total", "Eliminations during molten core ultimate", "[data-stat='molten_core_kills']"),
    ]),
    CharacterEntry::new("mercy", "Mercy", Role::Support, &[
        MetricDescriptor::count("damage_amplified", "Damage Amplified", "ow_hero_damage_amplified_total", "Total damage amplified with damage boost", "[data-stat='damage_amplified']"),
        MetricDescriptor::count("resurrects", "Resurrects", "ow_hero_resurrects_total", "Total number of resurrections performed", "[data-stat='resurrects']"),
        MetricDescriptor::count("players_rezed", "Players Rezed", "ow_hero_players_rezed_total", "Total players resurrected", "[data-stat='players_rezed']"),
        MetricDescriptor::count("valkyrie_damage_amp", "Valkyrie Damage Amp", "ow_hero_valkyrie_damage_amp_total", "Damage amplified during valkyrie ultimate", "[data-stat='valkyrie_damage_amp']"),
        MetricDescriptor::count("valkyrie_healing", "Valkyrie Healing", "ow_hero_valkyrie_healing_total", "Healing done during valkyrie ultimate", "[data-stat='valkyrie_healing']"),
    ]),
    CharacterEntry::new("reinhardt", "Reinhardt", Role::Tank, &[
        MetricDescriptor::count("damage_blocked", "Damage Blocked", "ow_hero_damage_blocked_total", "Total damage blocked by barrier shield", "[data-stat='damage_blocked']"),
        MetricDescriptor::count("charge_kills", "Charge Kills", "ow_hero_charge_kills_total", "Total eliminations with charge ability", "[data-stat='charge_kills']"),
        MetricDescriptor::count("fire_strike_kills", "Fire Strike Kills", "ow_hero_fire_strike_kills_total", "Total eliminations with fire strike", "[data-stat='fire_strike_kills']"),
        MetricDescriptor::count("earthshatter_kills", "Earthshatter Kills", "ow_hero_earthshatter_kills_total", "Eliminations during earthshatter ultimate", "[data-stat='earthshatter_kills']"),
        MetricDescriptor::count("rocket_hammer_kills", "Rocket Hammer Kills", "ow_hero_rocket_hammer_kills_total", "Total eliminations with rocket hammer", "[data-stat='rocket_hammer_kills']"),
    ]),
    CharacterEntry::new("ana", "Ana", Role::Support, &[
        MetricDescriptor::percentage("scoped_accuracy", "Scoped Accuracy", "ow_hero_scoped_accuracy_percent", "Scoped weapon accuracy percentage", "[data-stat='scoped_accuracy']"),
        MetricDescriptor::percentage("unscoped_accuracy", "Unscoped Accuracy", "ow_hero_unscoped_accuracy_percent", "Unscoped weapon accuracy percentage", "[data-stat='unscoped_accuracy']"),
        MetricDescriptor::count("enemies_slept", "Enemies Slept", "ow_hero_enemies_slept_total", "Total enemies put to sleep with sleep dart", "[data-stat='enemies_slept']"),
        MetricDescriptor::count("biotic_grenade_kills", "Biotic Grenade Kills", "ow_hero_biotic_grenade_kills_total", "Total eliminations with biotic grenade", "[data-stat='biotic_grenade_kills']"),
        MetricDescriptor::count("nanoboost_assists", "Nanoboost Assists", "ow_hero_nanoboost_assists_total", "Eliminations assisted by nanoboost ultimate", "[data-stat='nanoboost_assists']"),
    ]),
    CharacterEntry::new("dva", "D.Va", Role::Tank, &[
        MetricDescriptor::count("mech_kills", "Mech Kills", "ow_hero_mech_kills_total", "Total eliminations while in mech", "[data-stat='mech_kills']"),
        MetricDescriptor::count("pilot_kills", "Pilot Kills", "ow_hero_pilot_kills_total", "Total eliminations while out of mech", "[data-stat='pilot_kills']"),
        MetricDescriptor::count("damage_blocked", "Damage Blocked", "ow_hero_damage_blocked_total", "Total damage blocked by defense matrix", "[data-stat='damage_blocked']"),
        MetricDescriptor::count("self_destruct_kills", "Self Destruct Kills", "ow_hero_self_destruct_kills_total", "Eliminations with self-destruct ultimate", "[data-stat='self_destruct_kills']"),
        MetricDescriptor::count("call_mech_kills", "Call Mech Kills", "ow_hero_call_mech_kills_total", "Eliminations by calling down mech", "[data-stat='call_mech_kills']"),
    ]),
    CharacterEntry::new("illari", "Illari", Role::Support, &[
        MetricDescriptor::count("solar_rifle_healing", "Solar Rifle Healing", "ow_hero_solar_rifle_healing_total", "Total healing done with solar rifle", "[data-stat='solar_rifle_healing']"),
        MetricDescriptor::count("healing_pylon_healing", "Healing Pylon Healing", "ow_hero_healing_pylon_healing_total", "Total healing provided by healing pylon", "[data-stat='healing_pylon_healing']"),
        MetricDescriptor::count("captive_sun_kills", "Captive Sun Kills", "ow_hero_captive_sun_kills_total", "Eliminations with captive sun ultimate", "[data-stat='captive_sun_kills']"),
        MetricDescriptor::count("outburst_kills", "Outburst Kills", "ow_hero_outburst_kills_total", "Eliminations with outburst ability", "[data-stat='outburst_kills']"),
    ]),
    CharacterEntry::new("lifeweaver", "Lifeweaver", Role::Support, &[
        MetricDescriptor::count("healing_blossom_healing", "Healing Blossom Healing", "ow_hero_healing_blossom_healing_total", "Total healing done with healing blossom", "[data-stat='healing_blossom_healing']"),
        MetricDescriptor::count("life_grip_saves", "Life Grip Saves", "ow_hero_life_grip_saves_total", "Teammates saved with life grip", "[data-stat='life_grip_saves']"),
        MetricDescriptor::duration("petal_platform_uptime", "Petal Platform Uptime", "ow_hero_petal_platform_uptime_seconds", "Total uptime of petal platforms", "[data-stat='petal_platform_uptime']"),
        MetricDescriptor::count("tree_of_life_healing", "Tree Of Life Healing", "ow_hero_tree_of_life_healing_total", "Healing provided by tree of life ultimate", "[data-stat='tree_of_life_healing']"),
    ]),
    CharacterEntry::new("kiriko", "Kiriko", Role::Support, &[
        MetricDescriptor::count("healing_ofuuda_healing", "Healing Ofuuda Healing", "ow_hero_healing_ofuuda_healing_total", "Total healing done with healing ofuuda", "[data-stat='healing_ofuuda_healing']"),
        MetricDescriptor::count("kunai_critical_hits", "Kunai Critical Hits", "ow_hero_kunai_critical_hits_total", "Critical hits with kunai", "[data-stat='kunai_critical_hits']"),
        MetricDescriptor::count("swift_step_teleports", "Swift Step Teleports", "ow_hero_swift_step_teleports_total", "Number of swift step teleports used", "[data-stat='swift_step_teleports']"),
        MetricDescriptor::count("kitsune_final_blows", "Kitsune Final Blows", "ow_hero_kitsune_final_blows_total", "Final blows during kitsune rush ultimate", "[data-stat='kitsune_final_blows']"),
    ]),
    CharacterEntry::new("baptiste", "Baptiste", Role::Support, &[
        MetricDescriptor::count("biotic_launcher_healing", "Biotic Launcher Healing", "ow_hero_biotic_launcher_healing_total", "Total healing done with biotic launcher", "[data-stat='biotic_launcher_healing']"),
        MetricDescriptor::count("regenerative_burst_healing", "Regenerative Burst Healing", "ow_hero_regenerative_burst_healing_total", "Healing provided by regenerative burst", "[data-stat='regenerative_burst_healing']"),
        MetricDescriptor::count("immortality_field_saves", "Immortality Field Saves", "ow_hero_immortality_field_saves_total", "Teammates saved with immortality field", "[data-stat='immortality_field_saves']"),
        MetricDescriptor::count("amplification_matrix_damage", "Amplification Matrix Damage", "ow_hero_amplification_matrix_damage_total", "Damage amplified by amplification matrix ultimate", "[data-stat='amplification_matrix_damage']"),
    ]),
    CharacterEntry::new("lucio", "Lúcio", Role::Support, &[
        MetricDescriptor::percentage("sonic_amplifier_accuracy", "Sonic Amplifier Accuracy", "ow_hero_sonic_amplifier_accuracy_percent", "Sonic amplifier weapon accuracy percentage", "[data-stat='sonic_amplifier_accuracy']"),
        MetricDescriptor::count("sound_boop_kills", "Sound Boop Kills", "ow_hero_sound_boop_kills_total", "Environmental kills with sound wave", "[data-stat='sound_boop_kills']"),
        MetricDescriptor::duration("wall_ride_time", "Wall Ride Time", "ow_hero_wall_ride_time_seconds", "Total time spent wall riding", "[data-stat='wall_ride_time']"),
        MetricDescriptor::count("sound_barrier_provided", "Sound Barrier Provided", "ow_hero_sound_barrier_provided_total", "Shield health provided by sound barrier ultimate", "[data-stat='sound_barrier_provided']"),
    ]),
    CharacterEntry::new("zenyatta", "Zenyatta", Role::Support, &[
        MetricDescriptor::percentage("orb_destruction_accuracy", "Orb Destruction Accuracy", "ow_hero_orb_destruction_accuracy_percent", "Orb of destruction weapon accuracy percentage", "[data-stat='orb_destruction_accuracy']"),
        MetricDescriptor::count("orb_discord_assists", "Orb Discord Assists", "ow_hero_orb_discord_assists_total", "Eliminations assisted by orb of discord", "[data-stat='orb_discord_assists']"),
        MetricDescriptor::count("orb_harmony_healing", "Orb Harmony Healing", "ow_hero_orb_harmony_healing_total", "Healing provided by orb of harmony", "[data-stat='orb_harmony_healing']"),
        MetricDescriptor::count("transcendence_healing", "Transcendence Healing", "ow_hero_transcendence_healing_total", "Healing provided during transcendence ultimate", "[data-stat='transcendence_healing']"),
    ]),
    CharacterEntry::new("brigitte", "Brigitte", Role::Support, &[
        MetricDescriptor::percentage("rocket_flail_accuracy", "Rocket Flail Accuracy", "ow_hero_rocket_flail_accuracy_percent", "Rocket flail weapon accuracy percentage", "[data-stat='rocket_flail_accuracy']"),
        MetricDescriptor::count("whip_shot_kills", "Whip Shot Kills", "ow_hero_whip_shot_kills_total", "Environmental kills with whip shot", "[data-stat='whip_shot_kills']"),
        MetricDescriptor::count("repair_pack_healing", "Repair Pack Healing", "ow_hero_repair_pack_healing_total", "Healing provided by repair pack", "[data-stat='repair_pack_healing']"),
        MetricDescriptor::count("barrier_shield_blocked", "Barrier Shield Blocked", "ow_hero_barrier_shield_blocked_total", "Damage blocked by barrier shield", "[data-stat='barrier_shield_blocked']"),
        MetricDescriptor::count("rally_shield_provided", "Rally Shield Provided", "ow_hero_rally_shield_provided_total", "Shield health provided by rally ultimate", "[data-stat='rally_shield_provided']"),
    ]),
    CharacterEntry::new("cassidy", "Cassidy", Role::Damage, &[
        MetricDescriptor::percentage("peacekeeper_accuracy", "Peacekeeper Accuracy", "ow_hero_peacekeeper_accuracy_percent", "Peacekeeper weapon accuracy percentage", "[data-stat='peacekeeper_accuracy']"),
        MetricDescriptor::count("flashbang_enemies", "Flashbang Enemies", "ow_hero_flashbang_enemies_total", "Total enemies stunned with flashbang", "[data-stat='flashbang_enemies']"),
        MetricDescriptor::count("combat_roll_kills", "Combat Roll Kills", "ow_hero_combat_roll_kills_total", "Eliminations after using combat roll", "[data-stat='combat_roll_kills']"),
        MetricDescriptor::count("deadeye_kills", "Deadeye Kills", "ow_hero_deadeye_kills_total", "Eliminations with deadeye ultimate", "[data-stat='deadeye_kills']"),
    ]),
    CharacterEntry::new("tracer", "Tracer", Role::Damage, &[
        MetricDescriptor::percentage("pulse_guns_accuracy", "Pulse Guns Accuracy", "ow_hero_pulse_guns_accuracy_percent", "Pulse guns weapon accuracy percentage", "[data-stat='pulse_guns_accuracy']"),
        MetricDescriptor::count("blink_distance", "Blink Distance", "ow_hero_blink_distance_meters", "Total distance traveled with blink", "[data-stat='blink_distance']"),
        MetricDescriptor::count("recall_healing", "Recall Healing", "ow_hero_recall_healing_total", "Health recovered using recall", "[data-stat='recall_healing']"),
        MetricDescriptor::count("pulse_bomb_kills", "Pulse Bomb Kills", "ow_hero_pulse_bomb_kills_total", "Eliminations with pulse bomb ultimate", "[data-stat='pulse_bomb_kills']"),
    ]),
    CharacterEntry::new("pharah", "Pharah", Role::Damage, &[
        MetricDescriptor::percentage("rocket_launcher_accuracy", "Rocket Launcher Accuracy", "ow_hero_rocket_launcher_accuracy_percent", "Rocket launcher weapon accuracy percentage", "[data-stat='rocket_launcher_accuracy']"),
        MetricDescriptor::count("concussive_blast_kills", "Concussive Blast Kills", "ow_hero_concussive_blast_kills_total", "Environmental kills with concussive blast", "[data-stat='concussive_blast_kills']"),
        MetricDescriptor::count("barrage_kills", "Barrage Kills", "ow_hero_barrage_kills_total", "Eliminations with barrage ultimate", "[data-stat='barrage_kills']"),
        MetricDescriptor::duration("airborne_time", "Airborne Time", "ow_hero_airborne_time_seconds", "Total time spent airborne", "[data-stat='airborne_time']"),
    ]),
    CharacterEntry::new("sojourn", "Sojourn", Role::Damage, &[
        MetricDescriptor::percentage("railgun_accuracy", "Railgun Accuracy", "ow_hero_railgun_accuracy_percent", "Railgun weapon accuracy percentage", "[data-stat='railgun_accuracy']"),
        MetricDescriptor::count("railgun_critical_hits", "Railgun Critical Hits", "ow_hero_railgun_critical_hits_total", "Critical hits with railgun", "[data-stat='railgun_critical_hits']"),
        MetricDescriptor::count("power_slide_kills", "Power Slide Kills", "ow_hero_power_slide_kills_total", "Eliminations using power slide", "[data-stat='power_slide_kills']"),
        MetricDescriptor::count("overclock_kills", "Overclock Kills", "ow_hero_overclock_kills_total", "Eliminations during overclock ultimate", "[data-stat='overclock_kills']"),
    ]),
    CharacterEntry::new("mei", "Mei", Role::Damage, &[
        MetricDescriptor::percentage("endothermic_blaster_accuracy", "Endothermic Blaster Accuracy", "ow_hero_endothermic_blaster_accuracy_percent", "Endothermic blaster weapon accuracy percentage", "[data-stat='endothermic_blaster_accuracy']"),
        MetricDescriptor::count("enemies_frozen", "Enemies Frozen", "ow_hero_enemies_frozen_total", "Total enemies frozen", "[data-stat='enemies_frozen']"),
        MetricDescriptor::duration("ice_wall_uptime", "Ice Wall Uptime", "ow_hero_ice_wall_uptime_seconds", "Total uptime of ice walls", "[data-stat='ice_wall_uptime']"),
        MetricDescriptor::count("blizzard_kills", "Blizzard Kills", "ow_hero_blizzard_kills_total", "Eliminations with blizzard ultimate", "[data-stat='blizzard_kills']"),
    ]),
    CharacterEntry::new("junkrat", "Junkrat", Role::Damage, &[
        MetricDescriptor::percentage("frag_launcher_accuracy", "Frag Launcher Accuracy", "ow_hero_frag_launcher_accuracy_percent", "Frag launcher weapon accuracy percentage", "[data-stat='frag_launcher_accuracy']"),
        MetricDescriptor::count("concussion_mine_kills", "Concussion Mine Kills", "ow_hero_concussion_mine_kills_total", "Eliminations with concussion mine", "[data-stat='concussion_mine_kills']"),
        MetricDescriptor::count("steel_trap_kills", "Steel Trap Kills", "ow_hero_steel_trap_kills_total", "Eliminations with steel trap", "[data-stat='steel_trap_kills']"),
        MetricDescriptor::count("rip_tire_kills", "Rip Tire Kills", "ow_hero_rip_tire_kills_total", "Eliminations with rip-tire ultimate", "[data-stat='rip_tire_kills']"),
        MetricDescriptor::count("enemies_trapped", "Enemies Trapped", "ow_hero_enemies_trapped_total", "Enemies caught in steel trap", "[data-stat='enemies_trapped']"),
    ]),
    CharacterEntry::new("reaper", "Reaper", Role::Damage, &[
        MetricDescriptor::percentage("hellfire_shotguns_accuracy", "Hellfire Shotguns Accuracy", "ow_hero_hellfire_shotguns_accuracy_percent", "Hellfire shotguns weapon accuracy percentage", "[data-stat='hellfire_shotguns_accuracy']"),
        MetricDescriptor::count("wraith_form_distance", "Wraith Form Distance", "ow_hero_wraith_form_distance_meters", "Distance traveled in wraith form", "[data-stat='wraith_form_distance']"),
        MetricDescriptor::count("shadow_step_teleports", "Shadow Step Teleports", "ow_hero_shadow_step_teleports_total", "Number of shadow step teleports", "[data-stat='shadow_step_teleports']"),
        MetricDescriptor::count("death_blossom_kills", "Death Blossom Kills", "ow_hero_death_blossom_kills_total", "Eliminations with death blossom ultimate", "[data-stat='death_blossom_kills']"),
    ]),
    CharacterEntry::new("hanzo", "Hanzo", Role::Damage, &[
        MetricDescriptor::percentage("storm_bow_accuracy", "Storm Bow Accuracy", "ow_hero_storm_bow_accuracy_percent", "Storm bow weapon accuracy percentage", "[data-stat='storm_bow_accuracy']"),
        MetricDescriptor::count("sonic_arrow_assists", "Sonic Arrow Assists", "ow_hero_sonic_arrow_assists_total", "Eliminations assisted by sonic arrow", "[data-stat='sonic_arrow_assists']"),
        MetricDescriptor::count("scatter_arrow_kills", "Scatter Arrow Kills", "ow_hero_scatter_arrow_kills_total", "Eliminations with scatter arrow", "[data-stat='scatter_arrow_kills']"),
        MetricDescriptor::count("dragonstrike_kills", "Dragonstrike Kills", "ow_hero_dragonstrike_kills_total", "Eliminations with dragonstrike ultimate", "[data-stat='dragonstrike_kills']"),
    ]),
    CharacterEntry::new("winston", "Winston", Role::Tank, &[
        MetricDescriptor::count("tesla_cannon_kills", "Tesla Cannon Kills", "ow_hero_tesla_cannon_kills_total", "Eliminations with tesla cannon", "[data-stat='tesla_cannon_kills']"),
        MetricDescriptor::count("jump_pack_kills", "Jump Pack Kills", "ow_hero_jump_pack_kills_total", "Eliminations with jump pack", "[data-stat='jump_pack_kills']"),
        MetricDescriptor::duration("barrier_projector_uptime", "Barrier Projector Uptime", "ow_hero_barrier_projector_uptime_seconds", "Total uptime of barrier projector", "[data-stat='barrier_projector_uptime']"),
        MetricDescriptor::count("primal_rage_kills", "Primal Rage Kills", "ow_hero_primal_rage_kills_total", "Eliminations during primal rage ultimate", "[data-stat='primal_rage_kills']"),
    ]),
    CharacterEntry::new("roadhog", "Roadhog", Role::Tank, &[
        MetricDescriptor::percentage("scrap_gun_accuracy", "Scrap Gun Accuracy", "ow_hero_scrap_gun_accuracy_percent", "Scrap gun weapon accuracy percentage", "[data-stat='scrap_gun_accuracy']"),
        MetricDescriptor::percentage("chain_hook_accuracy", "Chain Hook Accuracy", "ow_hero_chain_hook_accuracy_percent", "Chain hook accuracy percentage", "[data-stat='chain_hook_accuracy']"),
        MetricDescriptor::count("chain_hook_kills", "Chain Hook Kills", "ow_hero_chain_hook_kills_total", "Eliminations after chain hook", "[data-stat='chain_hook_kills']"),
        MetricDescriptor::count("take_a_breathe_healing", "Take A Breathe Healing", "ow_hero_take_a_breathe_healing_total", "Health recovered with take a breathe", "[data-stat='take_a_breathe_healing']"),
        MetricDescriptor::count("whole_pig_kills", "Whole Pig Kills", "ow_hero_whole_pig_kills_total", "Eliminations with whole hog ultimate", "[data-stat='whole_pig_kills']"),
    ]),
    CharacterEntry::new("zarya", "Zarya", Role::Tank, &[
        MetricDescriptor::count("particle_cannon_kills", "Particle Cannon Kills", "ow_hero_particle_cannon_kills_total", "Eliminations with particle cannon", "[data-stat='particle_cannon_kills']"),
        MetricDescriptor::count("particle_barrier_absorbed", "Particle Barrier Absorbed", "ow_hero_particle_barrier_absorbed_total", "Damage absorbed by particle barriers", "[data-stat='particle_barrier_absorbed']"),
        MetricDescriptor::count("projected_barrier_saves", "Projected Barrier Saves", "ow_hero_projected_barrier_saves_total", "Teammates saved with projected barrier", "[data-stat='projected_barrier_saves']"),
        MetricDescriptor::count("graviton_surge_kills", "Graviton Surge Kills", "ow_hero_graviton_surge_kills_total", "Eliminations with graviton surge ultimate", "[data-stat='graviton_surge_kills']"),
        MetricDescriptor::count("high_energy_kills", "High Energy Kills", "ow_hero_high_energy_kills_total", "Eliminations while at high energy", "[data-stat='high_energy_kills']"),
    ]),
    CharacterEntry::new("mauga", "Mauga", Role::Tank, &[
        MetricDescriptor::count("incendiary_chaingun_damage", "Incendiary Chaingun Damage", "ow_hero_incendiary_chaingun_damage_total", "Damage dealt with incendiary chaingun", "[data-stat='incendiary_chaingun_damage']"),
        MetricDescriptor::count("volatile_chaingun_damage", "Volatile Chaingun Damage", "ow_hero_volatile_chaingun_damage_total", "Damage dealt with volatile chaingun", "[data-stat='volatile_chaingun_damage']"),
        MetricDescriptor::count("overrun_kills", "Overrun Kills", "ow_hero_overrun_kills_total", "Eliminations with overrun charge", "[data-stat='overrun_kills']"),
        MetricDescriptor::count("cage_fight_kills", "Cage Fight Kills", "ow_hero_cage_fight_kills_total", "Eliminations during cage fight ultimate", "[data-stat='cage_fight_kills']"),
    ]),
    CharacterEntry::new("hazard", "Hazard", Role::Tank, &[
        MetricDescriptor::count("spike_trap_kills", "Spike Trap Kills", "ow_hero_spike_trap_kills_total", "Eliminations with spike trap", "[data-stat='spike_trap_kills']"),
        MetricDescriptor::count("violent_leap_kills", "Violent Leap Kills", "ow_hero_violent_leap_kills_total", "Eliminations with violent leap", "[data-stat='violent_leap_kills']"),
        MetricDescriptor::duration("downtime_uptime", "Downtime Uptime", "ow_hero_downtime_uptime_seconds", "Total uptime of downtime walls", "[data-stat='downtime_uptime']"),
        MetricDescriptor::count("vanadium_rage_kills", "Vanadium Rage Kills", "ow_hero_vanadium_rage_kills_total", "Eliminations during vanadium rage ultimate", "[data-stat='vanadium_rage_kills']"),
    ]),
    CharacterEntry::new("junker-queen", "Junker Queen", Role::Tank, &[
        MetricDescriptor::percentage("scattergun_accuracy", "Scattergun Accuracy", "ow_hero_scattergun_accuracy_percent", "Scattergun weapon accuracy percentage", "[data-stat='scattergun_accuracy']"),
        MetricDescriptor::count("jagged_blade_kills", "Jagged Blade Kills", "ow_hero_jagged_blade_kills_total", "Eliminations with jagged blade", "[data-stat='jagged_blade_kills']"),
        MetricDescriptor::count("commanding_shout_healing", "Commanding Shout Healing", "ow_hero_commanding_shout_healing_total", "Healing provided by commanding shout", "[data-stat='commanding_shout_healing']"),
        MetricDescriptor::count("rampage_kills", "Rampage Kills", "ow_hero_rampage_kills_total", "Eliminations with rampage ultimate", "[data-stat='rampage_kills']"),
    ]),
    CharacterEntry::new("orisa", "Orisa", Role::Tank, &[
        MetricDescriptor::percentage("fusion_driver_accuracy", "Fusion Driver Accuracy", "ow_hero_fusion_driver_accuracy_percent", "Fusion driver weapon accuracy percentage", "[data-stat='fusion_driver_accuracy']"),
        MetricDescriptor::count("energy_javelin_kills", "Energy Javelin Kills", "ow_hero_energy_javelin_kills_total", "Eliminations with energy javelin", "[data-stat='energy_javelin_kills']"),
        MetricDescriptor::count("terra_force_kills", "Terra Force Kills", "ow_hero_terra_force_kills_total", "Eliminations with terra force ultimate", "[data-stat='terra_force_kills']"),
        MetricDescriptor::count("damage_amplified", "Damage Amplified", "ow_hero_damage_amplified_total", "Damage amplified for teammates", "[data-stat='damage_amplified']"),
    ]),
    CharacterEntry::new("sigma", "Sigma", Role::Tank, &[
        MetricDescriptor::percentage("hyper_spheres_accuracy", "Hyper Spheres Accuracy", "ow_hero_hyper_spheres_accuracy_percent", "Hyper spheres weapon accuracy percentage", "[data-stat='hyper_spheres_accuracy']"),
        MetricDescriptor::count("accretion_kills", "Accretion Kills", "ow_hero_accretion_kills_total", "Eliminations with accretion", "[data-stat='accretion_kills']"),
        MetricDescriptor::count("gravitic_flux_kills", "Gravitic Flux Kills", "ow_hero_gravitic_flux_kills_total", "Eliminations with gravitic flux ultimate", "[data-stat='gravitic_flux_kills']"),
        MetricDescriptor::count("damage_absorbed", "Damage Absorbed", "ow_hero_damage_absorbed_total", "Damage absorbed by experimental barrier", "[data-stat='damage_absorbed']"),
    ]),
    CharacterEntry::new("wrecking-ball", "Wrecking Ball", Role::Tank, &[
        MetricDescriptor::percentage("quad_cannon_accuracy", "Quad Cannon Accuracy", "ow_hero_quad_cannon_accuracy_percent", "Quad cannon weapon accuracy percentage", "[data-stat='quad_cannon_accuracy']"),
        MetricDescriptor::count("piledrive_kills", "Piledrive Kills", "ow_hero_piledrive_kills_total", "Eliminations with piledrive", "[data-stat='piledrive_kills']"),
        MetricDescriptor::count("minefield_kills", "Minefield Kills", "ow_hero_minefield_kills_total", "Eliminations with minefield ultimate", "[data-stat='minefield_kills']"),
        MetricDescriptor::count("players_knocked_back", "Players Knocked Back", "ow_hero_players_knocked_back_total", "Total players knocked back", "[data-stat='players_knocked_back']"),
    ]),
    CharacterEntry::new("doomfist", "Doomfist", Role::Tank, &[
        MetricDescriptor::percentage("hand_cannon_accuracy", "Hand Cannon Accuracy", "ow_hero_hand_cannon_accuracy_percent", "Hand cannon weapon accuracy percentage", "[data-stat='hand_cannon_accuracy']"),
        MetricDescriptor::count("seismic_slam_kills", "Seismic Slam Kills", "ow_hero_seismic_slam_kills_total", "Eliminations with seismic slam", "[data-stat='seismic_slam_kills']"),
        MetricDescriptor::count("rocket_punch_kills", "Rocket Punch Kills", "ow_hero_rocket_punch_kills_total", "Eliminations with rocket punch", "[data-stat='rocket_punch_kills']"),
        MetricDescriptor::count("meteor_strike_kills", "Meteor Strike Kills", "ow_hero_meteor_strike_kills_total", "Eliminations with meteor strike ultimate", "[data-stat='meteor_strike_kills']"),
    ]),
    CharacterEntry::new("sombra", "Sombra", Role::Damage, &[
        MetricDescriptor::percentage("machine_gun_accuracy", "Machine Gun Accuracy", "ow_hero_machine_gun_accuracy_percent", "Machine gun weapon accuracy percentage", "[data-stat='machine_gun_accuracy']"),
        MetricDescriptor::count("enemies_hacked", "Enemies Hacked", "ow_hero_enemies_hacked_total", "Total enemies hacked", "[data-stat='enemies_hacked']"),
        MetricDescriptor::count("enemies_empd", "Enemies Empd", "ow_hero_enemies_empd_total", "Total enemies hit with EMP ultimate", "[data-stat='enemies_empd']"),
        MetricDescriptor::count("health_packs_hacked", "Health Packs Hacked", "ow_hero_health_packs_hacked_total", "Total health packs hacked", "[data-stat='health_packs_hacked']"),
    ]),
    CharacterEntry::new("symmetra", "Symmetra", Role::Damage, &[
        MetricDescriptor::percentage("photon_projector_accuracy", "Photon Projector Accuracy", "ow_hero_photon_projector_accuracy_percent", "Photon projector weapon accuracy percentage", "[data-stat='photon_projector_accuracy']"),
        MetricDescriptor::count("sentry_turret_kills", "Sentry Turret Kills", "ow_hero_sentry_turret_kills_total", "Eliminations with sentry turrets", "[data-stat='sentry_turret_kills']"),
        MetricDescriptor::count("teleporter_pads_summoned", "Teleporter Pads Summoned", "ow_hero_teleporter_pads_summoned_total", "Total teleporter pads summoned", "[data-stat='teleporter_pads_summoned']"),
        MetricDescriptor::count("players_teleported", "Players Teleported", "ow_hero_players_teleported_total", "Total players teleported", "[data-stat='players_teleported']"),
    ]),
    CharacterEntry::new("bastion", "Bastion", Role::Damage, &[
        MetricDescriptor::percentage("configuration_assault_accuracy", "Configuration Assault Accuracy", "ow_hero_configuration_assault_accuracy_percent", "Configuration assault weapon accuracy percentage", "[data-stat='configuration_assault_accuracy']"),
        MetricDescriptor::percentage("configuration_recon_accuracy", "Configuration Recon Accuracy", "ow_hero_configuration_recon_accuracy_percent", "Configuration recon weapon accuracy percentage", "[data-stat='configuration_recon_accuracy']"),
        MetricDescriptor::count("self_repair_used", "Self Repair Used", "ow_hero_self_repair_used_total", "Total times self repair was used", "[data-stat='self_repair_used']"),
        MetricDescriptor::count("configuration_artillery_kills", "Configuration Artillery Kills", "ow_hero_configuration_artillery_kills_total", "Eliminations with configuration artillery ultimate", "[data-stat='configuration_artillery_kills']"),
    ]),
    CharacterEntry::new("ashe", "Ashe", Role::Damage, &[
        MetricDescriptor::percentage("viper_accuracy", "Viper Accuracy", "ow_hero_viper_accuracy_percent", "Viper rifle weapon accuracy percentage", "[data-stat='viper_accuracy']"),
        MetricDescriptor::count("dynamite_kills", "Dynamite Kills", "ow_hero_dynamite_kills_total", "Eliminations with dynamite", "[data-stat='dynamite_kills']"),
        MetricDescriptor::count("coach_gun_kills", "Coach Gun Kills", "ow_hero_coach_gun_kills_total", "Eliminations with coach gun", "[data-stat='coach_gun_kills']"),
        MetricDescriptor::count("bob_kills", "Bob Kills", "ow_hero_bob_kills_total", "Eliminations with BOB ultimate", "[data-stat='bob_kills']"),
    ]),
    CharacterEntry::new("echo", "Echo", Role::Damage, &[
        MetricDescriptor::percentage("tri_shot_accuracy", "Tri Shot Accuracy", "ow_hero_tri_shot_accuracy_percent", "Tri-shot weapon accuracy percentage", "[data-stat='tri_shot_accuracy']"),
        MetricDescriptor::count("sticky_bomb_kills", "Sticky Bomb Kills", "ow_hero_sticky_bomb_kills_total", "Eliminations with sticky bombs", "[data-stat='sticky_bomb_kills']"),
        MetricDescriptor::count("flight_time_used", "Flight Time Used", "ow_hero_flight_time_used_total", "Total flight time used", "[data-stat='flight_time_used']"),
        MetricDescriptor::count("duplicate_ultimate_kills", "Duplicate Ultimate Kills", "ow_hero_duplicate_ultimate_kills_total", "Eliminations with duplicated ultimates", "[data-stat='duplicate_ultimate_kills']"),
    ]),
    CharacterEntry::new("venture", "Venture", Role::Damage, &[
        MetricDescriptor::percentage("smart_excavator_accuracy", "Smart Excavator Accuracy", "ow_hero_smart_excavator_accuracy_percent", "Smart excavator weapon accuracy percentage", "[data-stat='smart_excavator_accuracy']"),
        MetricDescriptor::count("burrow_kills", "Burrow Kills", "ow_hero_burrow_kills_total", "Eliminations with burrow", "[data-stat='burrow_kills']"),
        MetricDescriptor::count("drill_dash_kills", "Drill Dash Kills", "ow_hero_drill_dash_kills_total", "Eliminations with drill dash", "[data-stat='drill_dash_kills']"),
        MetricDescriptor::count("tectonic_shock_kills", "Tectonic Shock Kills", "ow_hero_tectonic_shock_kills_total", "Eliminations with tectonic shock ultimate", "[data-stat='tectonic_shock_kills']"),
    ]),
    CharacterEntry::new("ramattra", "Ramattra", Role::Tank, &[
        MetricDescriptor::percentage("void_accelerator_accuracy", "Void Accelerator Accuracy", "ow_hero_void_accelerator_accuracy_percent", "Void accelerator weapon accuracy percentage", "[data-stat='void_accelerator_accuracy']"),
        MetricDescriptor::count("void_barrier_damage_blocked", "Void Barrier Damage Blocked", "ow_hero_void_barrier_damage_blocked_total", "Damage blocked by void barrier", "[data-stat='void_barrier_damage_blocked']"),
        MetricDescriptor::count("ravenous_vortex_kills", "Ravenous Vortex Kills", "ow_hero_ravenous_vortex_kills_total", "Eliminations with ravenous vortex", "[data-stat='ravenous_vortex_kills']"),
        MetricDescriptor::count("annihilation_kills", "Annihilation Kills", "ow_hero_annihilation_kills_total", "Eliminations with annihilation ultimate", "[data-stat='annihilation_kills']"),
    ]),
    CharacterEntry::new("moira", "Moira", Role::Support, &[
        MetricDescriptor::percentage("biotic_grasp_accuracy", "Biotic Grasp Accuracy", "ow_hero_biotic_grasp_accuracy_percent", "Biotic grasp weapon accuracy percentage", "[data-stat='biotic_grasp_accuracy']"),
        MetricDescriptor::count("coalescence_kills", "Coalescence Kills", "ow_hero_coalescence_kills_total", "Eliminations with coalescence ultimate", "[data-stat='coalescence_kills']"),
        MetricDescriptor::count("biotic_orb_kills", "Biotic Orb Kills", "ow_hero_biotic_orb_kills_total", "Eliminations with biotic orb", "[data-stat='biotic_orb_kills']"),
        MetricDescriptor::count("self_healing", "Self Healing", "ow_hero_self_healing_total", "Self healing done", "[data-stat='self_healing']"),
    ]),
    CharacterEntry::new("juno", "Juno", Role::Support, &[
        MetricDescriptor::percentage("medi_blaster_accuracy", "Medi Blaster Accuracy", "ow_hero_medi_blaster_accuracy_percent", "Medi-blaster weapon accuracy percentage", "[data-stat='medi_blaster_accuracy']"),
        MetricDescriptor::count("pulsar_torpedo_kills", "Pulsar Torpedo Kills", "ow_hero_pulsar_torpedo_kills_total", "Eliminations with pulsar torpedo", "[data-stat='pulsar_torpedo_kills']"),
        MetricDescriptor::count("glide_boost_used", "Glide Boost Used", "ow_hero_glide_boost_used_total", "Times glide boost was used", "[data-stat='glide_boost_used']"),
        MetricDescriptor::count("orbital_ray_kills", "Orbital Ray Kills", "ow_hero_orbital_ray_kills_total", "Eliminations with orbital ray ultimate", "[data-stat='orbital_ray_kills']"),
    ]),
    CharacterEntry::new("wuyang", "Wuyang", Role::Support, &[
        MetricDescriptor::percentage("unload_accuracy", "Unload Accuracy", "ow_hero_unload_accuracy_percent", "Unload weapon accuracy percentage", "[data-stat='unload_accuracy']"),
        MetricDescriptor::count("steadying_kills", "Steadying Kills", "ow_hero_steadying_kills_total", "Eliminations with steadying", "[data-stat='steadying_kills']"),
        MetricDescriptor::count("critical_moment_kills", "Critical Moment Kills", "ow_hero_critical_moment_kills_total", "Eliminations with critical moment", "[data-stat='critical_moment_kills']"),
        MetricDescriptor::count("critical_moment_uses", "Critical Moment Uses", "ow_hero_critical_moment_uses_total", "Times critical moment ability was used", "[data-stat='critical_moment_uses']"),
    ]),
    CharacterEntry::new("freja", "Freja", Role::Damage, &[
        MetricDescriptor::percentage("frost_bite_accuracy", "Frost Bite Accuracy", "ow_hero_frost_bite_accuracy_percent", "Frost bite weapon accuracy percentage", "[data-stat='frost_bite_accuracy']"),
        MetricDescriptor::count("ice_wall_used", "Ice Wall Used", "ow_hero_ice_wall_used_total", "Times ice wall was used", "[data-stat='ice_wall_used']"),
        MetricDescriptor::count("slow_debuff_applied", "Slow Debuff Applied", "ow_hero_slow_debuff_applied_total", "Times slow debuff was applied", "[data-stat='slow_debuff_applied']"),
        MetricDescriptor::count("arctic_inversion_kills", "Arctic Inversion Kills", "ow_hero_arctic_inversion_kills_total", "Eliminations with arctic inversion ultimate", "[data-stat='arctic_inversion_kills']"),
    ]),
];
