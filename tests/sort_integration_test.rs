//! End-to-end tests of the reordering pipeline: parse, classify, splice.

use indoc::indoc;
use pretty_assertions::assert_eq;
use solsort::{reorder_source_text, SortError};
use std::path::Path;

fn reorder(source: &str) -> Result<String, SortError> {
    reorder_source_text(source, Path::new("test.sol"))
}

#[test]
fn reorders_a_full_contract() {
    let source = indoc! {r#"
        // SPDX-License-Identifier: MIT
        pragma solidity ^0.8.19;

        contract Vault {
            uint256 public totalShares;

            event Deposited(address indexed from, uint256 amount);

            modifier onlyOwner() {
                _;
            }

            function _sweep(address token) private {
                totalShares = uint256(uint160(token));
            }

            function deposit() external payable {
                totalShares += msg.value;
            }

            constructor(address owner_) {
                totalShares = uint256(uint160(owner_));
            }

            function sharesOf(address account) public view returns (uint256) {
                return uint256(uint160(account));
            }

            receive() external payable {}

            function convert(uint256 amount) internal pure returns (uint256) {
                return amount * 2;
            }
        }
    "#};

    let expected = indoc! {r#"
        // SPDX-License-Identifier: MIT
        pragma solidity ^0.8.19;

        contract Vault {
            uint256 public totalShares;

            event Deposited(address indexed from, uint256 amount);

            modifier onlyOwner() {
                _;
            }

            constructor(address owner_) {
                totalShares = uint256(uint160(owner_));
            }

            receive() external payable {}

            function deposit() external payable {
                totalShares += msg.value;
            }

            function sharesOf(address account) public view returns (uint256) {
                return uint256(uint160(account));
            }

            function convert(uint256 amount) internal pure returns (uint256) {
                return amount * 2;
            }

            function _sweep(address token) private {
                totalShares = uint256(uint160(token));
            }
        }
    "#};

    assert_eq!(reorder(source).unwrap(), expected);
}

#[test]
fn text_outside_contract_bodies_is_untouched() {
    let source = indoc! {r#"
        pragma solidity ^0.8.0;

        import "./Other.sol";

        contract A {
            function b() private {}

            function a() external {}
        }
    "#};

    let expected = indoc! {r#"
        pragma solidity ^0.8.0;

        import "./Other.sol";

        contract A {
            function a() external {}

            function b() private {}
        }
    "#};

    assert_eq!(reorder(source).unwrap(), expected);
}

#[test]
fn function_without_visibility_is_an_error() {
    let source = indoc! {r#"
        contract Legacy {
            function orphan() {
                revert();
            }
        }
    "#};

    match reorder(source) {
        Err(SortError::UnrecognizedVisibility { name, value, .. }) => {
            assert_eq!(name, "orphan");
            assert_eq!(value, None);
        }
        other => panic!("expected UnrecognizedVisibility, got {other:?}"),
    }
}

#[test]
fn source_without_contracts_is_unchanged() {
    let source = "pragma solidity ^0.8.0;\n";
    assert_eq!(reorder(source).unwrap(), source);
}

#[test]
fn empty_source_is_unchanged() {
    assert_eq!(reorder("").unwrap(), "");
}

#[test]
fn sorting_twice_is_a_fixed_point() {
    let source = indoc! {r#"
        contract A {
            function c() private pure returns (uint256) {
                return 3;
            }

            fallback() external {}

            function b() public view returns (uint256) {
                return 2;
            }

            constructor() {}
        }
    "#};

    let once = reorder(source).unwrap();
    let twice = reorder(&once).unwrap();
    assert_eq!(twice, once);

    let ctor = once.find("constructor").unwrap();
    let fall = once.find("fallback").unwrap();
    let b = once.find("function b").unwrap();
    let c = once.find("function c").unwrap();
    assert!(ctor < fall && fall < b && b < c);
}
