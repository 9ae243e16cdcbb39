//! Sample quiz bank documents.

/// A bank exercising every question type, an illustrated question and a
/// question that is dropped for lack of options.
pub const SAMPLE_BANK: &str = r#"# Embedded Systems Quiz Bank

##### Bit Manipulation

**Which operator sets bit 3 of x?**
x &= ~(1 << 3)
x |= (1 << 3) 1
x ^= (1 << 3)


**Match the operators**
& Bitwise AND



| Bitwise OR



^ Bitwise XOR




**What does this print?**
**printf("%d", 0x0F >> 2);**
3 1
15


##### Sensors

**Which Raspberry Pi GPIO pins can read the sensor?**

IMAGE
GPIO17 1
GPIO27 1
3V3


**How long does one sample take?**
1. 0.104 ms 1
2. 1.04 ms


**Sort the testing stages**
Desk-checking 1
Unit testing 2
Integration testing 3


**The ___ keyword stops the compiler caching a register value.**
volatile


**Question with no answers**


##### Empty Topic
"#;

/// Number of questions `SAMPLE_BANK` yields per topic.
pub const SAMPLE_COUNTS: &[(&str, usize)] = &[("Bit Manipulation", 3), ("Sensors", 4)];
