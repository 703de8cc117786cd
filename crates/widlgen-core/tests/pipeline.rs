//! End-to-end pipeline test: JSON declaration dump in, externs text out.
//!
//! Runs index, merge, and emit over a miniature WebGPU-flavored
//! declaration set and asserts the output byte for byte, ordering
//! included.

use widlgen_ast::loader;
use widlgen_core::{generate, WidlError};

const DECLARATIONS: &str = r#"[
  {"type": "interface mixin", "name": "GPUObjectBase", "partial": false, "extAttrs": [],
   "members": [
     {"type": "attribute", "name": "label", "readonly": false,
      "idlType": {"type": "attribute-type", "generic": "", "nullable": false,
                  "union": false, "idlType": "DOMString"}}
   ]},
  {"type": "typedef", "name": "GPUSize32", "extAttrs": [],
   "idlType": {"type": "typedef-type", "generic": "", "nullable": false,
               "union": false, "idlType": "unsigned long"}},
  {"type": "namespace", "name": "GPUMapMode", "partial": false, "extAttrs": [],
   "members": [
     {"type": "const", "name": "READ",
      "idlType": {"type": "const-type", "generic": "", "nullable": false,
                  "union": false, "idlType": "GPUSize32"}},
     {"type": "const", "name": "WRITE",
      "idlType": {"type": "const-type", "generic": "", "nullable": false,
                  "union": false, "idlType": "GPUSize32"}}
   ]},
  {"type": "interface", "name": "GPUAdapter", "partial": false, "extAttrs": [],
   "members": []},
  {"type": "interface", "name": "GPU", "partial": false, "extAttrs": [],
   "members": [
     {"type": "operation", "name": "requestAdapter",
      "idlType": {"type": "return-type", "generic": "Promise", "nullable": false,
                  "union": false,
                  "idlType": [
                    {"type": "return-type", "generic": "", "nullable": false,
                     "union": false, "idlType": "GPUAdapter"}
                  ]}}
   ]},
  {"type": "interface", "name": "GPUQueue", "partial": false, "extAttrs": [],
   "members": []},
  {"type": "interface", "name": "GPUDevice", "partial": false, "extAttrs": [],
   "members": [
     {"type": "constructor"},
     {"type": "attribute", "name": "queue", "readonly": true,
      "idlType": {"type": "attribute-type", "generic": "", "nullable": false,
                  "union": false, "idlType": "GPUQueue"}}
   ]},
  {"type": "includes", "target": "GPUDevice", "includes": "GPUObjectBase"},
  {"type": "interface", "name": "GPUSupportedFeatures", "partial": false, "extAttrs": [],
   "members": [
     {"type": "setlike", "readonly": true,
      "idlType": [
        {"type": "type", "generic": "", "nullable": false, "union": false,
         "idlType": "DOMString"}
      ]}
   ]},
  {"type": "interface mixin", "name": "NavigatorGPU", "partial": false, "extAttrs": [],
   "members": [
     {"type": "attribute", "name": "gpu", "readonly": true,
      "idlType": {"type": "attribute-type", "generic": "", "nullable": false,
                  "union": false, "idlType": "GPU"}}
   ]},
  {"type": "includes", "target": "Navigator", "includes": "NavigatorGPU"},
  {"type": "includes", "target": "WorkerNavigator", "includes": "NavigatorGPU"},
  {"type": "interface", "name": "GPUDevice", "partial": true, "extAttrs": [],
   "members": [
     {"type": "attribute", "name": "debugEnabled", "readonly": false,
      "idlType": {"type": "attribute-type", "generic": "", "nullable": false,
                  "union": false, "idlType": "boolean"}}
   ]}
]"#;

const EXPECTED: &str = "\
// Generated by widlgen. DO NOT EDIT.

/** @type {?GPU} */
Navigator.prototype.gpu;

/** @type {!GPU} */
WorkerNavigator.prototype.gpu;

/** @const */
var GPUMapMode = {};
/** @type {number} */
GPUMapMode.READ;
/** @type {number} */
GPUMapMode.WRITE;

/** @constructor */
function GPUAdapter() {}

/** @constructor */
function GPU() {}
/** @return {!Promise<!GPUAdapter>} */
GPU.prototype.requestAdapter = function() {};

/** @constructor */
function GPUQueue() {}

/** @constructor */
function GPUDevice() {}
/** @type {string} */
GPUDevice.prototype.label;
/** @type {!GPUQueue} */
GPUDevice.prototype.queue;
/** @type {boolean} */
GPUDevice.prototype.debugEnabled;

/** @constructor */
function GPUSupportedFeatures() {}
/** @type {number} */
GPUSupportedFeatures.prototype.size;
/** @return {!Iterable<string>} */
GPUSupportedFeatures.prototype.entries = function() {};
/** @return {!Iterable<string>} */
GPUSupportedFeatures.prototype.keys = function() {};
/** @return {!Iterable<string>} */
GPUSupportedFeatures.prototype.values = function() {};
/** @return {undefined} */
GPUSupportedFeatures.prototype.forEach = function() {};
/** @return {boolean} */
GPUSupportedFeatures.prototype.has = function() {};
";

#[test]
fn externs_match_byte_for_byte() {
    let decls = loader::from_json(DECLARATIONS).unwrap();
    let externs = generate(&decls).unwrap();
    assert_eq!(externs, EXPECTED);
}

#[test]
fn generation_is_deterministic() {
    let decls = loader::from_json(DECLARATIONS).unwrap();
    assert_eq!(generate(&decls).unwrap(), generate(&decls).unwrap());
}

#[test]
fn unknown_type_reference_fails_the_whole_run() {
    let decls = loader::from_json(
        r#"[
          {"type": "interface", "name": "GPUDevice", "partial": false, "extAttrs": [],
           "members": [
             {"type": "attribute", "name": "queue", "readonly": true,
              "idlType": {"type": "attribute-type", "generic": "", "nullable": false,
                          "union": false, "idlType": "GPUQueue"}}
           ]}
        ]"#,
    )
    .unwrap();
    assert_eq!(
        generate(&decls).unwrap_err(),
        WidlError::UnknownBuiltin("GPUQueue".to_string())
    );
}
