use cf_core::Modifiers;

// CGEventFlags device-independent modifier masks.
const FLAG_MASK_SHIFT: u64 = 0x0002_0000;
const FLAG_MASK_CONTROL: u64 = 0x0004_0000;
const FLAG_MASK_ALTERNATE: u64 = 0x0008_0000;
const FLAG_MASK_COMMAND: u64 = 0x0010_0000;

pub fn modifiers_from_flag_bits(bits: u64) -> Modifiers {
    Modifiers {
        command: bits & FLAG_MASK_COMMAND != 0,
        shift: bits & FLAG_MASK_SHIFT != 0,
        control: bits & FLAG_MASK_CONTROL != 0,
        option: bits & FLAG_MASK_ALTERNATE != 0,
    }
}
