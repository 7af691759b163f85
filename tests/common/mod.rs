//! Helpers shared by the integration tests.

#![allow(dead_code)]

/// One constant pool record, written the way a class file stores it.
pub enum Cp<'a> {
    Utf8(&'a str),
    Integer(i32),
    Float(f32),
    Long(i64),
    Double(f64),
    Class(u16),
    String(u16),
    Fieldref(u16, u16),
    Methodref(u16, u16),
    InterfaceMethodref(u16, u16),
    NameAndType(u16, u16),
}

/// Encode `entries` as a constant pool section, deriving the count field from the slots used.
pub fn encode(entries: &[Cp]) -> Vec<u8> {
    let mut body = Vec::new();
    let mut count: u16 = 1;

    for entry in entries {
        count += 1;
        match entry {
            Cp::Utf8(value) => {
                let bytes = cesu8::to_java_cesu8(value);
                body.push(1);
                body.extend_from_slice(&(bytes.len() as u16).to_be_bytes());
                body.extend_from_slice(&bytes);
            }
            Cp::Integer(value) => {
                body.push(3);
                body.extend_from_slice(&value.to_be_bytes());
            }
            Cp::Float(value) => {
                body.push(4);
                body.extend_from_slice(&value.to_be_bytes());
            }
            Cp::Long(value) => {
                body.push(5);
                body.extend_from_slice(&value.to_be_bytes());
                count += 1;
            }
            Cp::Double(value) => {
                body.push(6);
                body.extend_from_slice(&value.to_be_bytes());
                count += 1;
            }
            Cp::Class(index) => push_indices(&mut body, 7, &[*index]),
            Cp::String(index) => push_indices(&mut body, 8, &[*index]),
            Cp::Fieldref(a, b) => push_indices(&mut body, 9, &[*a, *b]),
            Cp::Methodref(a, b) => push_indices(&mut body, 10, &[*a, *b]),
            Cp::InterfaceMethodref(a, b) => push_indices(&mut body, 11, &[*a, *b]),
            Cp::NameAndType(a, b) => push_indices(&mut body, 12, &[*a, *b]),
        }
    }

    let mut data = count.to_be_bytes().to_vec();
    data.extend_from_slice(&body);
    data
}

fn push_indices(body: &mut Vec<u8>, tag: u8, indices: &[u16]) {
    body.push(tag);
    for index in indices {
        body.extend_from_slice(&index.to_be_bytes());
    }
}

/// The constant pool javac emits for a minimal "Hello, World!" class.
pub fn hello_world() -> Vec<u8> {
    encode(&[
        Cp::Methodref(6, 15),                  // #1
        Cp::Fieldref(16, 17),                  // #2
        Cp::String(18),                        // #3
        Cp::Methodref(19, 20),                 // #4
        Cp::Class(21),                         // #5
        Cp::Class(22),                         // #6
        Cp::Utf8("<init>"),                    // #7
        Cp::Utf8("()V"),                       // #8
        Cp::Utf8("Code"),                      // #9
        Cp::Utf8("LineNumberTable"),           // #10
        Cp::Utf8("main"),                      // #11
        Cp::Utf8("([Ljava/lang/String;)V"),    // #12
        Cp::Utf8("SourceFile"),                // #13
        Cp::Utf8("Hello.java"),                // #14
        Cp::NameAndType(7, 8),                 // #15
        Cp::Class(23),                         // #16
        Cp::NameAndType(24, 25),               // #17
        Cp::Utf8("Hello, World!"),             // #18
        Cp::Class(26),                         // #19
        Cp::NameAndType(27, 28),               // #20
        Cp::Utf8("Hello"),                     // #21
        Cp::Utf8("java/lang/Object"),          // #22
        Cp::Utf8("java/lang/System"),          // #23
        Cp::Utf8("out"),                       // #24
        Cp::Utf8("Ljava/io/PrintStream;"),     // #25
        Cp::Utf8("java/io/PrintStream"),       // #26
        Cp::Utf8("println"),                   // #27
        Cp::Utf8("(Ljava/lang/String;)V"),     // #28
    ])
}

/// Route library logging to the test harness.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
