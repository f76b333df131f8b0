//! 端到端校验：真实 issue 中的 `docker version` 报告 → Server 版本 → 分诊标签

use issue_version_triage::{
    extract_version_from_body, label_from_version, label_issue_body, VersionTriage,
};

struct Fixture {
    name: &'static str,
    expected: [&'static str; 3],
    label: &'static str,
    body: &'static str,
}

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

const FIXTURES: &[Fixture] = &[
    Fixture {
        name: "plain_release",
        expected: ["Server:\n Version:      1.8.3", "1.8.3", ""],
        label: "version/1.8",
        body: r#"
Client:
 Version:      1.8.3
 API version:  1.20
 Go version:   go1.4.2
 Git commit:   f4bf5c7
 Built:        Mon Oct 12 06:06:01 UTC 2015
 OS/Arch:      linux/amd64

Server:
 Version:      1.8.3
 API version:  1.20
 Go version:   go1.4.2
 Git commit:   f4bf5c7
 Built:        Mon Oct 12 06:06:01 UTC 2015
 OS/Arch:      linux/amd64
"#,
    },
    Fixture {
        name: "centos_repackage",
        expected: ["Server:\n Version:         1.10.3-el7.centos", "1.10.3", "el7.centos"],
        label: "version/unsupported",
        body: r#"
Client:
 Version:         1.10.3-el7.centos
 API version:     1.22
 Package version: docker-1.10.3-10.el7.centos.x86_64
 Go version:      go1.4.2
 Git commit:      0b4a971-unsupported
 Built:           Tue Jun 21 17:51:37 2016
 OS/Arch:         linux/amd64

Server:
 Version:         1.10.3-el7.centos
 API version:     1.22
 Package version: docker-1.10.3-10.el7.centos.x86_64
 Go version:      go1.4.2
 Git commit:      0b4a971-unsupported
 Built:           Tue Jun 21 17:51:37 2016
 OS/Arch:         linux/amd64
"#,
    },
    Fixture {
        name: "commercial_edition",
        expected: ["Server:\n Version:      1.11.2-cs5", "1.11.2", "cs5"],
        label: "version/1.11",
        body: r#"
Client:
 Version:      1.11.2-cs5
 API version:  1.23
 Go version:   go1.5.4
 Git commit:   d364ea1
 Built:        Tue Sep 13 15:26:43 2016
 OS/Arch:      linux/amd64

Server:
 Version:      1.11.2-cs5
 API version:  1.23
 Go version:   go1.5.4
 Git commit:   d364ea1
 Built:        Tue Sep 13 15:26:43 2016
 OS/Arch:      linux/amd64
"#,
    },
    Fixture {
        name: "dev_snapshot",
        expected: ["Server:\n Version:      1.12.0-dev", "1.12.0", "dev"],
        label: "version/master",
        body: r#"
Client:
 Version:      1.12.0-dev
 API version:  1.24
 Go version:   go1.5.4
 Git commit:   af60a9e-unsupported
 Built:        Tue May 17 02:04:00 2016
 OS/Arch:      linux/amd64

Server:
 Version:      1.12.0-dev
 API version:  1.24
 Go version:   go1.5.4
 Git commit:   af60a9e-unsupported
 Built:        Tue May 17 02:04:00 2016
 OS/Arch:      linux/amd64
"#,
    },
    Fixture {
        name: "release_candidate",
        expected: ["Server:\n Version:      1.13.0-rc4", "1.13.0", "rc4"],
        label: "version/1.13",
        body: r#"
Client:
 Version:      1.13.0-rc4
 API version:  1.25
 Go version:   go1.7.3
 Git commit:   88862e7
 Built:        Sat Dec 17 01:34:17 2016
 OS/Arch:      darwin/amd64

Server:
 Version:      1.13.0-rc4
 API version:  1.25 (minimum version 1.12)
 Go version:   go1.7.3
 Git commit:   88862e7
 Built:        Sat Dec 17 01:34:17 2016
 OS/Arch:      linux/amd64
 Experimental: false
"#,
    },
    Fixture {
        name: "ce_release_candidate",
        expected: ["Server:\n Version:      17.03.0-ce-rc1", "17.03.0", "ce-rc1"],
        label: "version/17.03",
        body: r#"
Client:
 Version:      17.03.0-ce-rc1
 API version:  1.26
 Go version:   go1.7.5
 Git commit:   ce07fb6
 Built:        Mon Feb 20 10:12:38 2017
 OS/Arch:      darwin/amd64

Server:
 Version:      17.03.0-ce-rc1
 API version:  1.26 (minimum version 1.12)
 Go version:   go1.7.5
 Git commit:   ce07fb6
 Built:        Mon Feb 20 10:12:38 2017
 OS/Arch:      linux/amd64
 Experimental: true
"#,
    },
    Fixture {
        name: "community_edition",
        expected: ["Server:\n Version:      17.03.0-ce", "17.03.0", "ce"],
        label: "version/17.03",
        body: r#"
Client:
 Version:      17.03.0-ce
 API version:  1.26
 Go version:   go1.7.5
 Git commit:   60ccb22
 Built:        Thu Feb 23 10:40:59 2017
 OS/Arch:      windows/amd64

Server:
 Version:      17.03.0-ce
 API version:  1.26 (minimum version 1.12)
 Go version:   go1.7.5
 Git commit:   3a232c8
 Built:        Tue Feb 28 07:52:04 2017
 OS/Arch:      linux/amd64
 Experimental: true
"#,
    },
];

#[test]
fn test_extract_version_from_fixtures() {
    init_logger();
    for fixture in FIXTURES {
        let found = extract_version_from_body(fixture.body)
            .unwrap_or_else(|| panic!("{}: no version found", fixture.name));
        assert_eq!(found.to_parts(), fixture.expected, "{}", fixture.name);
        assert!(fixture.body.contains(found.full_match), "{}", fixture.name);
    }
}

#[test]
fn test_label_from_fixtures() {
    init_logger();
    for fixture in FIXTURES {
        let [_, version, suffix] = fixture.expected;
        let label = label_from_version(version, suffix).unwrap();
        assert_eq!(label.as_str(), fixture.label, "{}", fixture.name);
    }
}

#[test]
fn test_triage_fixtures_end_to_end() {
    init_logger();
    let triage = VersionTriage::default();
    for fixture in FIXTURES {
        let outcome = triage.label_body(fixture.body).unwrap().unwrap();
        assert_eq!(outcome.label, fixture.label, "{}", fixture.name);
        assert_eq!(outcome.version_match.full_match, fixture.expected[0]);
    }
}

#[test]
fn test_client_only_report_yields_nothing() {
    init_logger();
    let body = FIXTURES[0].body.split("Server:").next().unwrap();
    assert_eq!(extract_version_from_body(body), None);
    assert!(label_issue_body(body).unwrap().is_none());
}

#[test]
fn test_server_git_commit_differs_from_client() {
    init_logger();
    // 最后一个样例里 Client 与 Server 的 Git commit、OS/Arch 都不同，只认 Server
    let fixture = FIXTURES.last().unwrap();
    let found = extract_version_from_body(fixture.body).unwrap();
    let server_start = fixture.body.rfind("Server:").unwrap();
    let offset = found.full_match.as_ptr() as usize - fixture.body.as_ptr() as usize;
    assert_eq!(offset, server_start);
}
