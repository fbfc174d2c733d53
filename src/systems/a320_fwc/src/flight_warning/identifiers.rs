//! Names of the bus variables read and written by the FWC.

pub const FLIGHT_PHASE: &str = "FWC_FLIGHT_PHASE";
pub const ENGINE_N1: [&str; 2] = ["ENGINE_N1:1", "ENGINE_N1:2"];
pub const RADIO_HEIGHT: &str = "RA_RADIO_ALTITUDE";
pub const GEAR_EXTENSION: &str = "GEAR_CENTER_POSITION";
pub const GEAR_HANDLE_POSITION: &str = "GEAR_HANDLE_POSITION";
pub const FLAPS_HANDLE_INDEX: &str = "FLAPS_HANDLE_INDEX";
pub const FMA_VERTICAL_MODE: &str = "FMA_VERTICAL_MODE";
pub const TCAS_STATE: &str = "TCAS_STATE";
pub const AUTOPILOT_ACTIVE: [&str; 2] = ["AUTOPILOT_1_ACTIVE", "AUTOPILOT_2_ACTIVE"];
pub const ALTITUDE_CONSTRAINT: &str = "FG_ALTITUDE_CONSTRAINT";
pub const FCU_SELECTED_ALTITUDE: &str = "FCU_SELECTED_ALTITUDE";
pub const ALTITUDE_MANAGED: &str = "FCU_ALT_MANAGED";
pub const INDICATED_ALTITUDE: &str = "INDICATED_ALTITUDE";
pub const ON_GROUND: &str = "SIM_ON_GROUND";
pub const INSTINCTIVE_DISCONNECT: [&str; 2] = [
    "AUTOPILOT_INSTINCTIVE_DISCONNECT_L",
    "AUTOPILOT_INSTINCTIVE_DISCONNECT_R",
];
pub const CAVALRY_CHARGE_EMITTED: &str = "FWC_CAVALRY_CHARGE_EMITTED";

pub const TO_CONFIG_BUTTON: &str = "BTN_TOCONFIG";
pub const RECALL_BUTTON: &str = "BTN_RCL";
pub const MASTER_WARNING_BUTTON: [&str; 2] =
    ["PUSH_AUTOPILOT_MASTERAWARN_L", "PUSH_AUTOPILOT_MASTERAWARN_R"];
pub const MASTER_CAUTION_BUTTON: [&str; 2] =
    ["PUSH_AUTOPILOT_MASTERCAUT_L", "PUSH_AUTOPILOT_MASTERCAUT_R"];

pub const TO_MEMO: &str = "FWC_TOMEMO";
pub const LDG_MEMO: &str = "FWC_LDGMEMO";
pub const ALT_DEVIATION: &str = "ALT_DEVIATION";
pub const ALT_DEVIATION_SHORT: &str = "ALT_DEVIATION_SHORT";
pub const INHIBIT_OVERRIDE: &str = "FWC_INHIBOVRD";
pub const TO_CONFIG: &str = "FWC_TOCONFIG";
pub const RECALL: &str = "FWC_RECALL";
pub const AP_OFF_AUDIO: &str = "FWC_AP_OFF_AUDIO";
pub const AP_OFF_MASTER_WARNING: &str = "FWC_AP_OFF_MW";
pub const AP_OFF_TEXT: &str = "FWC_AP_OFF_TEXT";
