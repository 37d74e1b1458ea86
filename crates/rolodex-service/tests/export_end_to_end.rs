//! End-to-end export tests: contact records in, LDIF text out.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use pretty_assertions::assert_eq;
use rolodex_core::config::MalformedPolicy;
use rolodex_core::contact::{Address, Contact, Note, Notes, Phone};
use rolodex_service::export::{BatchOptions, export_to_string};
use rolodex_service::source::{ContactSource, JsonSource, VCardSource};

fn export(contacts: &[Contact]) -> String {
    let (text, _) = export_to_string(contacts, BatchOptions::default()).unwrap();
    text
}

fn jane() -> Contact {
    Contact {
        emails: vec!["jane@x.com".to_string()],
        phones: vec![Phone::new("work", "555-1000")],
        ..Contact::named("Jane Doe")
    }
}

fn description_of(text: &str) -> String {
    let encoded = text
        .lines()
        .find_map(|line| line.strip_prefix("description:: "))
        .unwrap();
    String::from_utf8(STANDARD.decode(encoded).unwrap()).unwrap()
}

#[test_log::test]
fn minimal_record() {
    assert_eq!(
        export(&[jane()]),
        "dn: cn=Jane Doe,mail=jane@x.com\n\
         objectclass: top\n\
         objectclass: person\n\
         objectclass: organizationalPerson\n\
         objectclass: inetOrgPerson\n\
         objectclass: mozillaAbPersonAlpha\n\
         cn: Jane Doe\n\
         mail: jane@x.com\n\
         telephoneNumber: 555-1000\n\
         \n"
    );
}

#[test_log::test]
fn third_email_goes_to_description() {
    let contact = Contact {
        emails: vec![
            "jane@x.com".to_string(),
            "jd@y.org".to_string(),
            "doe@z.net".to_string(),
        ],
        ..Contact::named("Jane Doe")
    };
    let text = export(&[contact]);

    assert!(text.contains("\nmail: jane@x.com\n"));
    assert!(text.contains("\nmozillaSecondEmail: jd@y.org\n"));
    assert!(text.contains("\ndescription: Other Email Addresses: doe@z.net\n"));
}

#[test_log::test]
fn nameless_and_mailless_record_produces_nothing() {
    let (text, report) = export_to_string(
        &[Contact::default(), Contact::named("")],
        BatchOptions::default(),
    )
    .unwrap();

    assert_eq!(text, "");
    assert_eq!(report.skipped, 2);
}

#[test_log::test]
fn multi_line_value_is_base64() {
    let contact = Contact {
        notes: Some(Notes::Text("a\nb".to_string())),
        ..jane()
    };
    let text = export(&[contact]);

    assert!(!text.contains("description: "));
    assert_eq!(description_of(&text), "a\nb");
}

#[test_log::test]
fn full_record() {
    let contact = Contact {
        given_name: "Jane".to_string(),
        surname: "Doe".to_string(),
        phones: vec![
            Phone::new("work", "555-1000"),
            Phone::structured("Cell", 555, 200, 3000, Some(12)),
            Phone::new("car", "555-4000"),
        ],
        addresses: vec![
            Address {
                streets: vec!["1 Main St".to_string(), "Apt 4".to_string()],
                city: "Springfield".to_string(),
                state: "IL".to_string(),
                postal_code: "62701".to_string(),
                country: "Emacs".to_string(),
                ..Address::new("HOME")
            },
            Address {
                streets: vec!["Lakeside".to_string()],
                ..Address::new("cabin")
            },
        ],
        company: "Acme, Inc.".to_string(),
        notes: Some(Notes::Fields(vec![
            Note::new("Title", "Engineer"),
            Note::new("birthday", "1970-01-01"),
            Note::new("timestamp", "2001-01-01"),
        ])),
        aka: vec!["JD".to_string()],
        ..jane()
    };
    let text = export(&[contact]);

    let head = "dn: cn=Jane Doe,mail=jane@x.com\n\
                objectclass: top\n\
                objectclass: person\n\
                objectclass: organizationalPerson\n\
                objectclass: inetOrgPerson\n\
                objectclass: mozillaAbPersonAlpha\n\
                givenName: Jane\n\
                sn: Doe\n\
                cn: Jane Doe\n\
                mail: jane@x.com\n\
                telephoneNumber: 555-1000\n\
                mobile: (555) 200-3000 x12\n\
                homeStreet: 1 Main St\n\
                mozillaHomeStreet2: Apt 4\n\
                mozillaHomeLocalityName: Springfield\n\
                mozillaHomeState: IL\n\
                mozillaHomePostalCode: 62701\n\
                title: Engineer\n\
                company: Acme\\2C Inc.\n\
                description:: ";
    assert!(text.starts_with(head), "unexpected entry:\n{text}");
    assert!(text.ends_with("\n\n"));
    assert_eq!(
        description_of(&text),
        "AKA: JD\n\
         Other Phone \"car\": 555-4000\n\
         Other Address \"cabin\": Lakeside\n\
         Birthday: 1970-01-01"
    );
}

#[test_log::test]
fn malformed_record_is_isolated_when_asked() {
    let broken = Contact {
        addresses: vec![Address::new("")],
        ..Contact::named("Broken")
    };
    let options = BatchOptions {
        on_malformed: MalformedPolicy::Skip,
        ..BatchOptions::default()
    };
    let (text, report) = export_to_string(&[broken, jane()], options).unwrap();

    assert_eq!(report.written, 1);
    assert_eq!(report.rejected[0].index, 0);
    assert!(text.starts_with("dn: cn=Jane Doe"));
}

#[test_log::test]
fn json_file_to_ldif() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("contacts.json");
    std::fs::write(
        &path,
        r#"[
            {"name": "Jane Doe", "emails": ["jane@x.com"],
             "phones": [{"label": "work", "number": "555-1000"}]},
            {"name": "", "emails": []}
        ]"#,
    )
    .unwrap();

    let contacts = JsonSource::new(&path).contacts().unwrap();
    assert_eq!(export(&contacts), export(&[jane()]));
}

#[test_log::test]
fn vcard_file_to_ldif() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("contacts.vcf");
    std::fs::write(
        &path,
        "BEGIN:VCARD\r\n\
         VERSION:3.0\r\n\
         FN:Jane Doe\r\n\
         N:Doe;Jane;;;\r\n\
         EMAIL;TYPE=INTERNET:jane@x.com\r\n\
         TEL;TYPE=WORK,VOICE:555-1000\r\n\
         TEL;TYPE=HOME:555-2000\r\n\
         ADR;TYPE=WORK:;;9 Work Rd;Springfield;IL;62701;USA\r\n\
         TITLE:Engineer\r\n\
         X-SPOUSE:Pat\r\n\
         END:VCARD\r\n",
    )
    .unwrap();

    let contacts = VCardSource::new(&path).contacts().unwrap();
    let text = export(&contacts);

    assert_eq!(
        text,
        "dn: cn=Jane Doe,mail=jane@x.com\n\
         objectclass: top\n\
         objectclass: person\n\
         objectclass: organizationalPerson\n\
         objectclass: inetOrgPerson\n\
         objectclass: mozillaAbPersonAlpha\n\
         givenName: Jane\n\
         sn: Doe\n\
         cn: Jane Doe\n\
         mail: jane@x.com\n\
         telephoneNumber: 555-1000\n\
         homePhone: 555-2000\n\
         street: 9 Work Rd\n\
         l: Springfield\n\
         st: IL\n\
         postalCode: 62701\n\
         c: USA\n\
         title: Engineer\n\
         description: spouse: Pat\n\
         \n"
    );
}

#[test_log::test]
fn empty_vcard_phone_does_not_abort_the_batch() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("contacts.vcf");
    std::fs::write(
        &path,
        "BEGIN:VCARD\nVERSION:3.0\nFN:First\nEND:VCARD\n\
         BEGIN:VCARD\nVERSION:3.0\nFN:Second\nTEL;TYPE=WORK:\nEND:VCARD\n",
    )
    .unwrap();

    let contacts = VCardSource::new(&path).contacts().unwrap();
    let (text, report) = export_to_string(&contacts, BatchOptions::default()).unwrap();

    assert_eq!(report.written, 2);
    assert!(text.contains("dn: cn=Second\n"));
    assert!(!text.contains("telephoneNumber"));
}

#[test_log::test]
fn vcard21_quoted_printable_to_ldif() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("contacts.vcf");
    std::fs::write(
        &path,
        "BEGIN:VCARD\r\nVERSION:2.1\r\nFN:Jane\r\n\
         NOTE;ENCODING=QUOTED-PRINTABLE:first part=\r\nsecond part\r\n\
         END:VCARD\r\n",
    )
    .unwrap();

    let contacts = VCardSource::new(&path).contacts().unwrap();
    let text = export(&contacts);

    assert!(text.contains("\ndescription: first partsecond part\n"));
}
